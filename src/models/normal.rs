//! Standard normal density and a closed-form approximation of its CDF.

use std::f64::consts::PI;

const P: f64 = 0.231_641_9;
const A1: f64 = 0.319_381_530;
const A2: f64 = -0.356_563_782;
const A3: f64 = 1.781_477_937;
const A4: f64 = -1.821_255_978;
const A5: f64 = 1.330_274_429;

/// Standard normal probability density.
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Cumulative standard normal distribution, Zelen & Severo style.
///
/// `1 - phi(|x|) * (a1*y + a2*y^2 + a3*y^3 + a4*y^4 + a5*y^5)` with
/// `y = 1 / (1 + 0.2316419 * |x|)`, reflected as `1 - result` for `x <= 0`.
/// Absolute error stays below 7.5e-7 on the whole real line.
pub fn cum_dist_normal(x: f64) -> f64 {
    let z = x.abs();
    let y = 1.0 / (1.0 + P * z);
    let poly = y * (A1 + y * (A2 + y * (A3 + y * (A4 + y * A5))));
    let result = 1.0 - norm_pdf(z) * poly;
    if x > 0.0 {
        result
    } else {
        1.0 - result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_at_zero() {
        assert!((cum_dist_normal(0.0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_cdf_known_points() {
        // Reference values of the exact CDF
        let cases = [
            (1.0, 0.841_344_746_068_543),
            (-1.0, 0.158_655_253_931_457),
            (1.96, 0.975_002_104_851_780),
            (-2.5, 0.006_209_665_325_776),
            (3.0, 0.998_650_101_968_370),
        ];
        for (x, expected) in cases {
            let got = cum_dist_normal(x);
            assert!(
                (got - expected).abs() < 7.5e-7,
                "Phi({}) = {}, expected {}",
                x,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_cdf_infinite_limits() {
        assert_eq!(cum_dist_normal(f64::INFINITY), 1.0);
        assert_eq!(cum_dist_normal(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_pdf_peak() {
        assert!((norm_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
        assert!((norm_pdf(1.5) - norm_pdf(-1.5)).abs() < 1e-15);
    }
}
