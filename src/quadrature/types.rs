use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

/// Composite stepping rule used by the refinement loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QuadratureRule {
    /// Sample each subinterval at its centre
    #[default]
    Midpoint,
    /// Linear interpolation between subinterval endpoints
    Trapezoidal,
    /// Endpoints and midpoints with 1-4-1 weighting per subinterval
    Simpson,
}

impl QuadratureRule {
    pub const ALL: [QuadratureRule; 3] = [
        QuadratureRule::Midpoint,
        QuadratureRule::Trapezoidal,
        QuadratureRule::Simpson,
    ];

    /// Estimate the integral of `f` over `[a, b]` with `n` equal subintervals.
    pub fn step<F>(self, f: &F, a: f64, b: f64, n: usize) -> f64
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        match self {
            QuadratureRule::Midpoint => super::rules::midpoint_step(f, a, b, n),
            QuadratureRule::Trapezoidal => super::rules::trapezoidal_step(f, a, b, n),
            QuadratureRule::Simpson => super::rules::simpson_step(f, a, b, n),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QuadratureRule::Midpoint => "midpoint",
            QuadratureRule::Trapezoidal => "trapezoidal",
            QuadratureRule::Simpson => "simpson",
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for QuadratureRule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "midpoint" | "mid" => Ok(QuadratureRule::Midpoint),
            "trapezoidal" | "trapezoid" | "trap" => Ok(QuadratureRule::Trapezoidal),
            "simpson" => Ok(QuadratureRule::Simpson),
            other => Err(anyhow!("Unknown quadrature rule: {}", other)),
        }
    }
}

/// Outcome of a converged integration together with its convergence diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Integration {
    /// The accepted estimate (the finer of the last two)
    pub value: f64,
    /// Subdivision count of the accepted estimate
    pub subdivisions: usize,
    /// Number of doublings past the initial pair of estimates
    pub refinements: u32,
    /// |E2 - E1| at acceptance, always <= tolerance
    pub difference: f64,
}
