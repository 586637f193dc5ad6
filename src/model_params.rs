//! Value types describing a vanilla European option.
//!
//! [`OptionParams`] carries decimal, annualised inputs straight into the pricer.
//! [`MarketQuote`] carries the same contract the way a desk or a command line
//! states it (percentages and months) and converts into [`OptionParams`].

use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Single-letter code, `'c'` or `'p'`.
    pub fn code(self) -> char {
        match self {
            OptionType::Call => 'c',
            OptionType::Put => 'p',
        }
    }
}

impl TryFrom<char> for OptionType {
    type Error = PricingError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(OptionType::Call),
            'p' => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(c.to_string())),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = PricingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OptionType> for String {
    fn from(t: OptionType) -> Self {
        t.to_string()
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.pad("call"),
            OptionType::Put => f.pad("put"),
        }
    }
}

/// Black-Scholes inputs in decimal / annualised units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParams {
    /// Spot price of the underlying
    pub s0: f64,
    /// Strike
    pub k: f64,
    /// Time to maturity in years
    pub t: f64,
    /// Volatility as a decimal (0.20 for 20%)
    pub sigma: f64,
    /// Continuously compounded risk-free rate as a decimal
    pub r: f64,
    /// Continuous dividend yield as a decimal
    pub q: f64,
}

impl OptionParams {
    pub fn new(s0: f64, k: f64, t: f64, sigma: f64, r: f64, q: f64) -> Self {
        Self {
            s0,
            k,
            t,
            sigma,
            r,
            q,
        }
    }

    /// `(ln(s0/k) + (r - q + sigma^2/2) t) / (sigma sqrt(t))`
    pub fn d1(&self) -> f64 {
        ((self.s0 / self.k).ln() + (self.r - self.q + self.sigma * self.sigma / 2.0) * self.t)
            / (self.sigma * self.t.sqrt())
    }

    /// `(ln(s0/k) + (r - q - sigma^2/2) t) / (sigma sqrt(t))`
    pub fn d2(&self) -> f64 {
        ((self.s0 / self.k).ln() + (self.r - self.q - self.sigma * self.sigma / 2.0) * self.t)
            / (self.sigma * self.t.sqrt())
    }

    /// Spot discounted by the dividend yield, `s0 e^(-q t)`.
    pub fn discounted_spot(&self) -> f64 {
        self.s0 * (-self.q * self.t).exp()
    }

    /// Strike discounted at the risk-free rate, `k e^(-r t)`.
    pub fn discounted_strike(&self) -> f64 {
        self.k * (-self.r * self.t).exp()
    }
}

/// An option quote in market units: percentages and months.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketQuote {
    pub option_type: OptionType,
    /// Underlying price at time 0
    pub spot: f64,
    pub strike: f64,
    /// Volatility in percent (20 for 20%)
    pub volatility_pct: f64,
    /// Risk-free rate in percent
    pub rate_pct: f64,
    /// Time to expiration in months
    pub expiry_months: f64,
    /// Dividend yield in percent
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_pct: f64,
}

impl MarketQuote {
    /// Months to years (/12) and percentages to decimals (/100).
    pub fn to_option_params(&self) -> OptionParams {
        OptionParams {
            s0: self.spot,
            k: self.strike,
            t: self.expiry_months / 12.0,
            sigma: self.volatility_pct / 100.0,
            r: self.rate_pct / 100.0,
            q: self.dividend_pct / 100.0,
        }
    }
}

#[cfg(feature = "serde")]
impl MarketQuote {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        toml::from_str(s).context("Failed to parse market quote")
    }

    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_from_char() {
        assert_eq!(OptionType::try_from('c'), Ok(OptionType::Call));
        assert_eq!(OptionType::try_from('P'), Ok(OptionType::Put));
        assert_eq!(
            OptionType::try_from('x'),
            Err(PricingError::InvalidOptionType("x".to_string()))
        );
    }

    #[test]
    fn test_option_type_from_str() {
        assert_eq!("call".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!(" Put ".parse::<OptionType>(), Ok(OptionType::Put));
        assert!("straddle".parse::<OptionType>().is_err());
        assert_eq!(OptionType::Put.code(), 'p');
    }

    #[test]
    fn test_d2_is_d1_minus_vol_sqrt_t() {
        let p = OptionParams::new(50.0, 45.0, 0.5, 0.2, 0.06, 0.02);
        let diff = p.d1() - p.d2() - p.sigma * p.t.sqrt();
        assert!(diff.abs() < 1e-12);
    }

    #[test]
    fn test_quote_unit_conversion() {
        let quote = MarketQuote {
            option_type: OptionType::Call,
            spot: 40.0,
            strike: 41.0,
            volatility_pct: 20.0,
            rate_pct: 3.0,
            expiry_months: 6.0,
            dividend_pct: 2.0,
        };
        let p = quote.to_option_params();
        assert_eq!(p.t, 0.5);
        assert!((p.sigma - 0.20).abs() < 1e-15);
        assert!((p.r - 0.03).abs() < 1e-15);
        assert!((p.q - 0.02).abs() < 1e-15);
        assert_eq!(p.s0, 40.0);
        assert_eq!(p.k, 41.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_quote_from_toml() {
        let quote = MarketQuote::from_toml_str(
            r#"
            option_type = "put"
            spot = 40.0
            strike = 41.0
            volatility_pct = 20.0
            rate_pct = 3.0
            expiry_months = 6.0
            "#,
        )
        .unwrap();
        assert_eq!(quote.option_type, OptionType::Put);
        assert_eq!(quote.dividend_pct, 0.0);

        let bad = MarketQuote::from_toml_str(
            "option_type = \"x\"\nspot = 1.0\nstrike = 1.0\nvolatility_pct = 1.0\nrate_pct = 1.0\nexpiry_months = 1.0",
        );
        assert!(bad.is_err());
    }
}
