//! Configuration for the calculator module.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Default lower bound of the admissible operand range (inclusive).
pub const DEFAULT_MIN_OPERAND: f64 = -100_000_000.0;

/// Default upper bound of the admissible operand range (inclusive).
pub const DEFAULT_MAX_OPERAND: f64 = 100_000_000.0;

/// Prefix for environment variable overrides, e.g. `CALCULATOR_MAX_OPERAND`.
pub const ENV_PREFIX: &str = "CALCULATOR_";

/// Keys that may be overridden from the environment. Other `CALCULATOR_*`
/// variables are ignored.
const ENV_KEYS: [&str; 2] = ["min_operand", "max_operand"];

/// Configuration error for the calculator module
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to load calculator config: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid operand range [{min}, {max}]: {reason}")]
    InvalidRange {
        min: f64,
        max: f64,
        reason: &'static str,
    },
}

/// Configuration for the calculator module.
///
/// Integer operands are compared against the bounds exactly, also for
/// bounds beyond 2^53.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CalculatorConfig {
    /// Smallest admissible operand. Default: `-100000000`
    pub min_operand: f64,
    /// Largest admissible operand. Default: `100000000`
    pub max_operand: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            min_operand: DEFAULT_MIN_OPERAND,
            max_operand: DEFAULT_MAX_OPERAND,
        }
    }
}

impl CalculatorConfig {
    /// Checks that the bounds describe a non-empty finite interval.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidRange` if a bound is not finite or `min_operand > max_operand`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_operand, self.max_operand);
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::InvalidRange {
                min,
                max,
                reason: "bounds must be finite",
            });
        }
        if min > max {
            return Err(ConfigError::InvalidRange {
                min,
                max,
                reason: "min_operand must not exceed max_operand",
            });
        }
        Ok(())
    }

    /// Extracts and validates the configuration from a prepared figment.
    ///
    /// Keys missing from the figment fall back to their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Load` if extraction fails, or `ConfigError::InvalidRange`
    /// if the resulting bounds are invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration: defaults, then an optional YAML file, then
    /// `CALCULATOR_*` environment variables.
    ///
    /// # Errors
    /// Same as [`CalculatorConfig::from_figment`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS));
        Self::from_figment(&figment)
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
