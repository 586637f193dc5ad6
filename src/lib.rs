//! # MFE-Lib: Vanilla Option Pricing and Adaptive Quadrature
//!
//! `mfe-lib` is a small numerical toolkit for quantitative finance. It prices
//! plain-vanilla European options with the Black-Scholes closed form and integrates
//! real functions of one variable with self-refining composite rules.
//!
//! ## Core Features
//!
//! - **Black-Scholes Pricing**: calls and puts with a continuous dividend yield
//! - **Normal CDF Approximation**: Zelen & Severo closed form, error below 7.5e-7
//! - **Adaptive Quadrature**: midpoint, trapezoidal and Simpson rules with
//!   successive-doubling refinement and a bounded refinement budget
//! - **Typed Errors**: invalid option types, degenerate inputs and non-convergence are
//!   reported as errors, never as magic numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use mfe_lib::{integrate, price_option, QuadratureRule};
//!
//! // Call, spot 50, strike 45, 6 months, 20% vol, 6% rate, 2% dividend yield
//! let call = price_option('c', 50.0, 45.0, 0.5, 0.20, 0.06, 0.02)?;
//! assert!((call - 6.508363).abs() < 1e-6);
//!
//! let area = integrate(|x| x * x, 0.0, 2.0, QuadratureRule::Simpson, 4, 1e-6)?;
//! assert!((area - 8.0 / 3.0).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Configuration Presets
//!
//! The quadrature engine ships with presets in [`default_configs`]:
//! - `standard()`: midpoint, n0 = 4, tolerance 1e-6
//! - `fast()`: Simpson with a small refinement budget
//! - `precise()`: Simpson with a 1e-10 tolerance
//! - `minimal()`: coarse settings for quick checks

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod model_params;
pub mod models;
pub mod quadrature;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Errors
pub use error::{Error, PricingError, QuadratureError, Result};

// Option inputs
pub use model_params::{MarketQuote, OptionParams, OptionType};

// Pricing and distribution helpers
pub use models::{cum_dist_normal, norm_pdf, put_call_parity_gap};

// Quadrature types
pub use quadrature::{Integration, QuadratureConfig, QuadratureRule};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured quadrature settings.
///
/// # Available Configurations
///
/// - [`standard()`]: the classic defaults (midpoint, n0 = 4, tol = 1e-6)
/// - [`fast()`]: Simpson, small refinement budget
/// - [`precise()`]: Simpson, tight tolerance
/// - [`minimal()`]: quick validation
pub mod default_configs {
    use crate::quadrature::QuadratureConfig;

    /// Midpoint rule, four initial subintervals, tolerance 1e-6, 20 refinements.
    ///
    /// ```rust
    /// use mfe_lib::{default_configs, QuadratureRule};
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.rule, QuadratureRule::Midpoint);
    /// ```
    pub fn standard() -> QuadratureConfig {
        QuadratureConfig::default()
    }

    /// Simpson rule with tolerance 1e-6 and at most 16 refinements.
    ///
    /// Suited to smooth integrands where Simpson converges in a handful of steps.
    pub fn fast() -> QuadratureConfig {
        QuadratureConfig::fast()
    }

    /// Simpson rule with tolerance 1e-10 and at most 24 refinements.
    pub fn precise() -> QuadratureConfig {
        QuadratureConfig::precise()
    }

    /// Midpoint rule with tolerance 1e-3 and at most 8 refinements.
    ///
    /// **Use Cases:**
    /// - Debugging
    /// - Unit tests
    pub fn minimal() -> QuadratureConfig {
        QuadratureConfig::minimal()
    }
}

/// Maximum number of doublings used by [`integrate`].
pub const DEFAULT_MAX_REFINEMENTS: u32 = 20;

/// Integrate `f` over `[a, b]`.
///
/// Estimates the integral with `initial_n` and `2 * initial_n` subintervals of the
/// chosen rule and keeps doubling until two consecutive estimates differ by at most
/// `tolerance`; the finer estimate is returned. Call with
/// `QuadratureRule::Midpoint, 4, 1e-6` for the classic defaults.
///
/// # Errors
///
/// * [`QuadratureError::InvalidSubdivisions`] if `initial_n == 0`
/// * [`QuadratureError::InvalidTolerance`] if `tolerance` is not positive and finite
/// * [`QuadratureError::NotConverged`] after [`DEFAULT_MAX_REFINEMENTS`] doublings
/// * [`QuadratureError::NonFiniteEstimate`] if the integrand yields NaN or infinities
///
/// # Example
///
/// ```rust
/// use mfe_lib::{integrate, QuadratureRule};
///
/// let v = integrate(|x: f64| x.exp(), 0.0, 1.0, QuadratureRule::Trapezoidal, 4, 1e-8)?;
/// assert!((v - (std::f64::consts::E - 1.0)).abs() < 1e-7);
/// # Ok::<(), mfe_lib::QuadratureError>(())
/// ```
pub fn integrate<F>(
    f: F,
    a: f64,
    b: f64,
    rule: QuadratureRule,
    initial_n: usize,
    tolerance: f64,
) -> std::result::Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    quadrature::refine(&f, a, b, rule, initial_n, tolerance, DEFAULT_MAX_REFINEMENTS)
        .map(|res| res.value)
}

/// Integrate `f` over `[a, b]` with the settings of a [`QuadratureConfig`].
pub fn integrate_with_config<F>(
    f: F,
    a: f64,
    b: f64,
    config: &QuadratureConfig,
) -> std::result::Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    integrate_with_report(f, a, b, config).map(|res| res.value)
}

/// Like [`integrate_with_config`], but also returns the subdivision count,
/// number of refinements and final estimate difference.
pub fn integrate_with_report<F>(
    f: F,
    a: f64,
    b: f64,
    config: &QuadratureConfig,
) -> std::result::Result<Integration, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    quadrature::refine_with_config(&f, a, b, config)
}

/// Price a European option with the Black-Scholes formula.
///
/// # Arguments
///
/// * `option_type` - `'c'` for a call, `'p'` for a put (case-insensitive)
/// * `s0` - spot price of the underlying
/// * `k` - strike
/// * `t` - time to maturity in **years**
/// * `sigma` - volatility as a **decimal** (0.20 for 20%)
/// * `r` - risk-free rate as a decimal
/// * `q` - continuous dividend yield as a decimal
///
/// Percent and month conversions are the caller's job; see
/// [`MarketQuote::to_option_params`].
///
/// # Errors
///
/// * [`PricingError::InvalidOptionType`] for any other character
/// * [`PricingError::DegenerateParameters`] when `s0`, `k`, `t` or `sigma` is not
///   strictly positive (NaN included), or when `d1`, `d2` or the price is not finite
///
/// # Example
///
/// ```rust
/// use mfe_lib::{price_option, PricingError};
///
/// let put = price_option('p', 50.0, 45.0, 0.5, 0.20, 0.06, 0.02)?;
/// assert!((put - 0.675920).abs() < 1e-6);
///
/// assert!(matches!(
///     price_option('x', 50.0, 45.0, 0.5, 0.20, 0.06, 0.02),
///     Err(PricingError::InvalidOptionType(_))
/// ));
/// # Ok::<(), PricingError>(())
/// ```
pub fn price_option(
    option_type: char,
    s0: f64,
    k: f64,
    t: f64,
    sigma: f64,
    r: f64,
    q: f64,
) -> std::result::Result<f64, PricingError> {
    let option_type = OptionType::try_from(option_type)?;
    black_scholes_price(option_type, &OptionParams::new(s0, k, t, sigma, r, q))
}

/// Typed counterpart of [`price_option`].
pub fn black_scholes_price(
    option_type: OptionType,
    params: &OptionParams,
) -> std::result::Result<f64, PricingError> {
    models::bs::bs_price(option_type, params)
}

/// Convert a [`MarketQuote`] to decimal units and price it.
pub fn price_quote(quote: &MarketQuote) -> std::result::Result<f64, PricingError> {
    black_scholes_price(quote.option_type, &quote.to_option_params())
}
