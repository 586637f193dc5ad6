//! Error types for the quadrature engine and the option pricer.
//!
//! Each component reports its own enum; [`Error`] folds both so that callers mixing
//! the two can use a single `?`.

use thiserror::Error;

/// Failures of the adaptive quadrature engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    /// The initial subdivision count must be at least one.
    #[error("initial subdivision count must be >= 1, got {0}")]
    InvalidSubdivisions(usize),

    /// The convergence tolerance must be positive and finite.
    #[error("tolerance must be > 0 and finite, got {0}")]
    InvalidTolerance(f64),

    /// Successive estimates still differed by more than the tolerance after the
    /// maximum number of doublings.
    #[error(
        "no convergence after {refinements} refinements (n = {subdivisions}): \
         last estimate {estimate}, last difference {difference}"
    )]
    NotConverged {
        refinements: u32,
        subdivisions: usize,
        estimate: f64,
        difference: f64,
    },

    /// A rule produced NaN or an infinity.
    #[error("non-finite integral estimate at n = {subdivisions}")]
    NonFiniteEstimate { subdivisions: usize },

    /// Doubling the subdivision count would overflow `usize`.
    #[error("subdivision count overflow while refining from n = {0}")]
    SubdivisionOverflow(usize),
}

/// Failures of the Black-Scholes pricer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Option type outside `{call, put}`.
    #[error("invalid option type: {0:?} (expected 'c'/'call' or 'p'/'put')")]
    InvalidOptionType(String),

    /// Spot, strike, maturity or volatility is not strictly positive, or the inputs
    /// led to a non-finite intermediate or result.
    #[error(
        "degenerate parameters: {quantity} is not finite \
         (s0={s0}, k={k}, t={t}, sigma={sigma}, r={r}, q={q})"
    )]
    DegenerateParameters {
        quantity: &'static str,
        s0: f64,
        k: f64,
        t: f64,
        sigma: f64,
        r: f64,
        q: f64,
    },
}

/// Crate-level error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn both_steps() -> Result<f64> {
        let area = crate::integrate(
            |x| x,
            0.0,
            1.0,
            crate::QuadratureRule::Midpoint,
            0,
            1e-6,
        )?;
        let price = crate::price_option('z', 1.0, 1.0, 1.0, 0.2, 0.0, 0.0)?;
        Ok(area + price)
    }

    #[test]
    fn test_component_errors_fold_into_crate_error() {
        assert_eq!(
            both_steps(),
            Err(Error::Quadrature(QuadratureError::InvalidSubdivisions(0)))
        );
        let err: Error = PricingError::InvalidOptionType("z".into()).into();
        assert!(err.to_string().contains("invalid option type"));
    }
}
