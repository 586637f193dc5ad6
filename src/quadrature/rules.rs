//! Composite Newton-Cotes stepping rules on `n` equal subintervals.
//!
//! Interior nodes run over `i = 1..n-1`, so every node `a + i*h` strictly between
//! the endpoints is sampled exactly once.

#[inline]
fn interval(a: f64, b: f64, n: usize) -> f64 {
    (b - a) / n as f64
}

/// Sum of `f` over the interior nodes `a + i*h`, `i = 1..n-1`.
#[inline]
fn interior_sum<F>(f: &F, a: f64, h: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    (1..n).map(|i| f(a + h * i as f64)).sum()
}

/// Sum of `f` over the subinterval centres `a + h/2 + i*h`, `i = 0..n`.
#[inline]
fn midpoint_sum<F>(f: &F, a: f64, h: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    (0..n).map(|i| f(a + h / 2.0 + h * i as f64)).sum()
}

/// `h * sum f(m_i)` over the subinterval centres.
pub fn midpoint_step<F>(f: &F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let h = interval(a, b, n);
    midpoint_sum(f, a, h, n) * h
}

/// `h * [(f(a) + f(b)) / 2 + sum f(x_i)]` over the interior nodes.
pub fn trapezoidal_step<F>(f: &F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let h = interval(a, b, n);
    ((f(a) + f(b)) / 2.0 + interior_sum(f, a, h, n)) * h
}

/// `(h/6) * [f(a) + f(b) + 2 * sum f(x_i) + 4 * sum f(m_i)]`.
pub fn simpson_step<F>(f: &F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let h = interval(a, b, n);
    let ends = f(a) + f(b);
    let interior = 2.0 * interior_sum(f, a, h, n);
    let mids = 4.0 * midpoint_sum(f, a, h, n);
    (ends + interior + mids) * h / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_exact_for_linear() {
        let f = |x: f64| 3.0 * x + 1.0;
        // integral over [0, 2] = 3*2 + 2 = 8
        assert!((midpoint_step(&f, 0.0, 2.0, 1) - 8.0).abs() < 1e-12);
        assert!((midpoint_step(&f, 0.0, 2.0, 7) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoidal_exact_for_linear() {
        let f = |x: f64| 3.0 * x + 1.0;
        assert!((trapezoidal_step(&f, 0.0, 2.0, 1) - 8.0).abs() < 1e-12);
        assert!((trapezoidal_step(&f, 0.0, 2.0, 5) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoidal_samples_every_interior_node() {
        // Constant integrand: any dropped node shows up as a missing h.
        let one = |_: f64| 1.0;
        for n in 1..20 {
            let est = trapezoidal_step(&one, 0.0, 1.0, n);
            assert!((est - 1.0).abs() < 1e-12, "n={} gave {}", n, est);
        }
    }

    #[test]
    fn test_simpson_exact_for_cubic() {
        let f = |x: f64| x * x * x - 2.0 * x * x + 1.0;
        // [0, 2]: 4 - 16/3 + 2 = 2/3
        for n in [1, 2, 3, 8] {
            let est = simpson_step(&f, 0.0, 2.0, n);
            assert!((est - 2.0 / 3.0).abs() < 1e-12, "n={} gave {}", n, est);
        }
    }

    #[test]
    fn test_reversed_bounds_negate() {
        let f = |x: f64| x * x;
        let fwd = simpson_step(&f, 0.0, 2.0, 4);
        let rev = simpson_step(&f, 2.0, 0.0, 4);
        assert!((fwd + rev).abs() < 1e-12);
    }
}
