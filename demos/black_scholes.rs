// demos/black_scholes.rs

//! Price a plain vanilla European option from a quote given in market units.
//!
//! Usage:
//!   cargo run --example black_scholes                 # built-in quote
//!   cargo run --example black_scholes -- quote.toml   # quote from a TOML file
//!
//! The quote file uses percentages and months, e.g.
//!
//! ```toml
//! option_type = "call"
//! spot = 40.0
//! strike = 41.0
//! volatility_pct = 20.0
//! rate_pct = 3.0
//! expiry_months = 6.0
//! dividend_pct = 2.0
//! ```
//!
//! Set `RUST_LOG=mfe_lib=trace` to see the d1/d2 terms.

use anyhow::{Context, Result};
use mfe_lib::{price_quote, MarketQuote, OptionType};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let quote = match std::env::args().nth(1) {
        Some(path) => MarketQuote::from_toml_file(&path)
            .with_context(|| format!("Could not load quote from {}", path))?,
        None => default_quote(),
    };

    println!("Black-Scholes European Option Pricer");
    println!("====================================");

    let params = quote.to_option_params();
    println!(
        "S = {}; K = {}; T = {}; sigma = {}; q = {}; r = {};",
        params.s0, params.k, params.t, params.sigma, params.q, params.r
    );

    let price = price_quote(&quote).context("Pricing failed")?;
    println!("The price of the {} option is {:.6}", quote.option_type, price);

    Ok(())
}

/// Call with strike 41, spot 40, 20% volatility, 3% rate, 2% dividend, 6 months.
fn default_quote() -> MarketQuote {
    MarketQuote {
        option_type: OptionType::Call,
        spot: 40.0,
        strike: 41.0,
        volatility_pct: 20.0,
        rate_pct: 3.0,
        expiry_months: 6.0,
        dividend_pct: 2.0,
    }
}
