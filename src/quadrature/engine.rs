use tracing::{debug, warn};

use super::config::QuadratureConfig;
use super::types::{Integration, QuadratureRule};
use crate::error::QuadratureError;

/// Successive-doubling refinement.
///
/// Computes `E1` at `n0` and `E2` at `2 * n0`, then keeps doubling `n` (shifting
/// `E2` into `E1`) until `|E2 - E1| <= tol`. The accepted value is `E2`. The check is
/// a self-consistency test, not an error bound against the true integral.
///
/// Gives up with [`QuadratureError::NotConverged`] after `max_refinements`
/// doublings beyond the first pair.
pub fn refine<F>(
    f: &F,
    a: f64,
    b: f64,
    rule: QuadratureRule,
    initial_n: usize,
    tol: f64,
    max_refinements: u32,
) -> Result<Integration, QuadratureError>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    if initial_n == 0 {
        return Err(QuadratureError::InvalidSubdivisions(initial_n));
    }
    if !(tol > 0.0 && tol.is_finite()) {
        return Err(QuadratureError::InvalidTolerance(tol));
    }

    let mut n = initial_n;
    let mut e1 = checked_step(f, a, b, rule, n)?;
    n = double(n)?;
    let mut e2 = checked_step(f, a, b, rule, n)?;
    let mut diff = (e2 - e1).abs();
    let mut refinements = 0u32;

    debug!(%rule, n, estimate = e2, difference = diff, "initial estimates");

    while diff > tol {
        if refinements >= max_refinements {
            warn!(
                %rule,
                n,
                estimate = e2,
                difference = diff,
                tol,
                "quadrature refinement limit reached"
            );
            return Err(QuadratureError::NotConverged {
                refinements,
                subdivisions: n,
                estimate: e2,
                difference: diff,
            });
        }

        e1 = e2;
        n = double(n)?;
        e2 = checked_step(f, a, b, rule, n)?;
        diff = (e2 - e1).abs();
        refinements += 1;

        debug!(%rule, n, estimate = e2, difference = diff, "refined");
    }

    Ok(Integration {
        value: e2,
        subdivisions: n,
        refinements,
        difference: diff,
    })
}

/// [`refine`] driven by a [`QuadratureConfig`].
pub fn refine_with_config<F>(
    f: &F,
    a: f64,
    b: f64,
    config: &QuadratureConfig,
) -> Result<Integration, QuadratureError>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    refine(
        f,
        a,
        b,
        config.rule,
        config.initial_subdivisions,
        config.tolerance,
        config.max_refinements,
    )
}

// A NaN difference would compare as converged, so non-finite estimates stop here.
fn checked_step<F>(
    f: &F,
    a: f64,
    b: f64,
    rule: QuadratureRule,
    n: usize,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let estimate = rule.step(f, a, b, n);
    if estimate.is_finite() {
        Ok(estimate)
    } else {
        Err(QuadratureError::NonFiniteEstimate { subdivisions: n })
    }
}

fn double(n: usize) -> Result<usize, QuadratureError> {
    n.checked_mul(2).ok_or(QuadratureError::SubdivisionOverflow(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn test_simpson_converges_immediately_on_quadratic() {
        let res = refine(&square, 0.0, 2.0, QuadratureRule::Simpson, 4, 1e-6, 20).unwrap();
        assert_eq!(res.refinements, 0);
        assert_eq!(res.subdivisions, 8);
        assert!((res.value - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_accepted_difference_within_tolerance() {
        for rule in QuadratureRule::ALL {
            let res = refine(&square, 0.0, 2.0, rule, 4, 1e-6, 20).unwrap();
            assert!(res.difference <= 1e-6, "{}: {}", rule, res.difference);
            assert_eq!(res.subdivisions, 8 << res.refinements);
        }
    }

    #[test]
    fn test_rejects_zero_subdivisions() {
        let err = refine(&square, 0.0, 1.0, QuadratureRule::Midpoint, 0, 1e-6, 20).unwrap_err();
        assert_eq!(err, QuadratureError::InvalidSubdivisions(0));
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        for tol in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            let err = refine(&square, 0.0, 1.0, QuadratureRule::Midpoint, 4, tol, 20).unwrap_err();
            assert!(matches!(err, QuadratureError::InvalidTolerance(_)));
        }
    }

    #[test]
    fn test_refinement_cap_reports_not_converged() {
        // Midpoint error on x^2 is h^2/6, so no doubling reaches this tolerance.
        let err = refine(&square, 0.0, 2.0, QuadratureRule::Midpoint, 4, 1e-300, 3).unwrap_err();
        match err {
            QuadratureError::NotConverged {
                refinements,
                subdivisions,
                ..
            } => {
                assert_eq!(refinements, 3);
                assert_eq!(subdivisions, 64);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nan_integrand_is_an_error() {
        let nan = |_: f64| f64::NAN;
        let err = refine(&nan, 0.0, 1.0, QuadratureRule::Trapezoidal, 4, 1e-6, 20).unwrap_err();
        assert_eq!(err, QuadratureError::NonFiniteEstimate { subdivisions: 4 });
    }

    #[test]
    fn test_overflow_is_detected() {
        assert_eq!(double(4), Ok(8));
        assert_eq!(
            double(usize::MAX / 2 + 1),
            Err(QuadratureError::SubdivisionOverflow(usize::MAX / 2 + 1))
        );
    }
}
