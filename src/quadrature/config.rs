use super::types::QuadratureRule;

/// Settings for the adaptive refinement loop
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadratureConfig {
    /// Stepping rule
    #[cfg_attr(feature = "serde", serde(default))]
    pub rule: QuadratureRule,

    /// Subdivision count of the first estimate (doubled for the second)
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_initial_subdivisions")
    )]
    pub initial_subdivisions: usize,

    /// Maximum accepted |E2 - E1| between successive doublings
    #[cfg_attr(feature = "serde", serde(default = "default_tolerance"))]
    pub tolerance: f64,

    /// Doublings allowed after the first pair of estimates before giving up
    #[cfg_attr(feature = "serde", serde(default = "default_max_refinements"))]
    pub max_refinements: u32,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            rule: QuadratureRule::default(),
            initial_subdivisions: default_initial_subdivisions(),
            tolerance: default_tolerance(),
            max_refinements: default_max_refinements(),
        }
    }
}

impl QuadratureConfig {
    /// Simpson with a loose tolerance, for smooth integrands where speed matters
    pub fn fast() -> Self {
        Self {
            rule: QuadratureRule::Simpson,
            initial_subdivisions: 4,
            tolerance: 1e-6,
            max_refinements: 16,
        }
    }

    /// Simpson with a tight tolerance and a generous refinement budget
    pub fn precise() -> Self {
        Self {
            rule: QuadratureRule::Simpson,
            initial_subdivisions: 8,
            tolerance: 1e-10,
            max_refinements: 24,
        }
    }

    /// Coarse settings for quick checks
    pub fn minimal() -> Self {
        Self {
            rule: QuadratureRule::Midpoint,
            initial_subdivisions: 4,
            tolerance: 1e-3,
            max_refinements: 8,
        }
    }

    pub fn with_rule(mut self, rule: QuadratureRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_initial_subdivisions(mut self, n: usize) -> Self {
        self.initial_subdivisions = n;
        self
    }
}

#[cfg(feature = "serde")]
impl QuadratureConfig {
    /// Parse a config from TOML; missing fields take their defaults.
    ///
    /// ```rust
    /// # use mfe_lib::{QuadratureConfig, QuadratureRule};
    /// let cfg = QuadratureConfig::from_toml_str("rule = \"simpson\"\ntolerance = 1e-8").unwrap();
    /// assert_eq!(cfg.rule, QuadratureRule::Simpson);
    /// assert_eq!(cfg.initial_subdivisions, 4);
    /// ```
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        toml::from_str(s).context("Failed to parse quadrature config")
    }

    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

fn default_initial_subdivisions() -> usize {
    4
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_max_refinements() -> u32 {
    20
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let cfg = QuadratureConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, QuadratureConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let cfg = QuadratureConfig::from_toml_str(
            "rule = \"trapezoidal\"\ninitial_subdivisions = 16\nmax_refinements = 5",
        )
        .unwrap();
        assert_eq!(cfg.rule, QuadratureRule::Trapezoidal);
        assert_eq!(cfg.initial_subdivisions, 16);
        assert_eq!(cfg.max_refinements, 5);
        assert_eq!(cfg.tolerance, 1e-6);
    }

    #[test]
    fn test_unknown_rule_rejected() {
        assert!(QuadratureConfig::from_toml_str("rule = \"romberg\"").is_err());
    }
}
