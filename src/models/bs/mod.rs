// Closed-form Black-Scholes pricing of European calls and puts with a continuous
// dividend yield. Greeks and implied volatility are out of scope.

use tracing::trace;

use crate::error::PricingError;
use crate::model_params::{OptionParams, OptionType};
use crate::models::normal::cum_dist_normal;

/// Price of a European option under Black-Scholes assumptions.
///
/// ```text
/// call =  s0 e^(-qt) N(d1)  - k e^(-rt) N(d2)
/// put  = -s0 e^(-qt) N(-d1) + k e^(-rt) N(-d2)
/// ```
///
/// Spot, strike, maturity and volatility must be strictly positive, and `d1`, `d2`
/// and the price must be finite; anything else is reported as
/// [`PricingError::DegenerateParameters`]. The price itself is not clamped.
pub fn bs_price(option_type: OptionType, p: &OptionParams) -> Result<f64, PricingError> {
    ensure_positive("s0", p.s0, p)?;
    ensure_positive("k", p.k, p)?;
    ensure_positive("t", p.t, p)?;
    ensure_positive("sigma", p.sigma, p)?;

    let d1 = p.d1();
    let d2 = p.d2();
    trace!(%option_type, d1, d2, "black-scholes terms");

    ensure_finite("d1", d1, p)?;
    ensure_finite("d2", d2, p)?;

    let fwd_spot = p.discounted_spot();
    let fwd_strike = p.discounted_strike();

    let price = match option_type {
        OptionType::Call => fwd_spot * cum_dist_normal(d1) - fwd_strike * cum_dist_normal(d2),
        OptionType::Put => -fwd_spot * cum_dist_normal(-d1) + fwd_strike * cum_dist_normal(-d2),
    };

    ensure_finite("price", price, p)?;
    Ok(price)
}

/// Price of a European call.
#[allow(non_snake_case)]
pub fn bs_call_price(
    S: f64,
    K: f64,
    T: f64,
    sigma: f64,
    r: f64,
    q: f64,
) -> Result<f64, PricingError> {
    bs_price(OptionType::Call, &OptionParams::new(S, K, T, sigma, r, q))
}

/// Price of a European put.
#[allow(non_snake_case)]
pub fn bs_put_price(
    S: f64,
    K: f64,
    T: f64,
    sigma: f64,
    r: f64,
    q: f64,
) -> Result<f64, PricingError> {
    bs_price(OptionType::Put, &OptionParams::new(S, K, T, sigma, r, q))
}

/// `s0 e^(-qt) - k e^(-rt)`, which `call - put` must equal.
pub fn put_call_parity_gap(p: &OptionParams) -> f64 {
    p.discounted_spot() - p.discounted_strike()
}

// NaN fails the comparison and is rejected too.
fn ensure_positive(
    quantity: &'static str,
    value: f64,
    p: &OptionParams,
) -> Result<(), PricingError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(degenerate(quantity, p))
    }
}

fn ensure_finite(
    quantity: &'static str,
    value: f64,
    p: &OptionParams,
) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(degenerate(quantity, p))
    }
}

fn degenerate(quantity: &'static str, p: &OptionParams) -> PricingError {
    PricingError::DegenerateParameters {
        quantity,
        s0: p.s0,
        k: p.k,
        t: p.t,
        sigma: p.sigma,
        r: p.r,
        q: p.q,
    }
}
