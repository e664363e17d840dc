//! CLI configuration management.
//!
//! Loads [`NumericsConfig`] from a TOML file, applies `NUMERICS_*`
//! environment overrides and validates the result before any command runs.
//!
//! ```toml
//! log_level = "debug"
//! max_points = 8
//! tolerance = 1e-10
//! max_iterations = 200
//! relaxation_factor = 1.25
//! error_measure = "relative"
//! root_policy = "iteration-count"
//! linear_policy = "error-then-iterations"
//! ```

use numerics_compare::SelectionPolicy;
use numerics_core::math::solvers::{ErrorMeasure, SolverConfig};
use numerics_core::validation::{PointSetValidator, MAX_POINTS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "NUMERICS_";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Effective configuration of the `numerics` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericsConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Maximum number of interpolation points
    #[serde(default = "default_max_points")]
    pub max_points: usize,

    /// Convergence tolerance of every iterative method
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration cap of every iterative method
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// SOR relaxation factor
    #[serde(default = "default_relaxation_factor")]
    pub relaxation_factor: f64,

    /// Step error measure
    #[serde(default)]
    pub error_measure: ErrorMeasure,

    /// Selection policy for root-finding comparisons
    #[serde(default = "default_root_policy")]
    pub root_policy: SelectionPolicy,

    /// Selection policy for linear-system comparisons
    #[serde(default = "default_linear_policy")]
    pub linear_policy: SelectionPolicy,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_points() -> usize {
    MAX_POINTS
}

fn default_tolerance() -> f64 {
    1e-7
}

fn default_max_iterations() -> usize {
    100
}

fn default_relaxation_factor() -> f64 {
    1.2
}

fn default_root_policy() -> SelectionPolicy {
    SelectionPolicy::IterationCount
}

fn default_linear_policy() -> SelectionPolicy {
    SelectionPolicy::ErrorThenIterations
}

impl Default for NumericsConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            max_points: default_max_points(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            relaxation_factor: default_relaxation_factor(),
            error_measure: ErrorMeasure::default(),
            root_policy: default_root_policy(),
            linear_policy: default_linear_policy(),
        }
    }
}

impl NumericsConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, otherwise start from the defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from a key lookup.
    ///
    /// Keys are the field names upper-cased behind [`ENV_PREFIX`], e.g.
    /// `NUMERICS_TOLERANCE`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |field: &str| {
            let key = format!("{}{}", ENV_PREFIX, field);
            lookup(&key).map(|value| (key, value))
        };

        if let Some((_, value)) = var("LOG_LEVEL") {
            self.log_level = value;
        }
        if let Some((key, value)) = var("MAX_POINTS") {
            self.max_points = parse_override(&key, &value)?;
        }
        if let Some((key, value)) = var("TOLERANCE") {
            self.tolerance = parse_override(&key, &value)?;
        }
        if let Some((key, value)) = var("MAX_ITERATIONS") {
            self.max_iterations = parse_override(&key, &value)?;
        }
        if let Some((key, value)) = var("RELAXATION_FACTOR") {
            self.relaxation_factor = parse_override(&key, &value)?;
        }
        if let Some((key, value)) = var("ERROR_MEASURE") {
            self.error_measure = match value.to_lowercase().as_str() {
                "absolute" => ErrorMeasure::Absolute,
                "relative" => ErrorMeasure::Relative,
                _ => {
                    return Err(ConfigError::Env(format!(
                        "{}='{}' (expected absolute or relative)",
                        key, value
                    )))
                }
            };
        }
        if let Some((key, value)) = var("ROOT_POLICY") {
            self.root_policy = parse_override(&key, &value)?;
        }
        if let Some((key, value)) = var("LINEAR_POLICY") {
            self.linear_policy = parse_override(&key, &value)?;
        }

        Ok(self)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Validate the configuration, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.max_points == 0 {
            errors.push("max_points must be greater than 0".to_string());
        }

        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            errors.push(format!("tolerance {} must be positive", self.tolerance));
        }

        if self.max_iterations == 0 {
            errors.push("max_iterations must be greater than 0".to_string());
        }

        if !(self.relaxation_factor > 0.0 && self.relaxation_factor < 2.0) {
            errors.push(format!(
                "relaxation_factor {} must lie in (0, 2)",
                self.relaxation_factor
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load, override from the environment and validate.
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Solver settings shared by every method in a comparison.
    ///
    /// Call only on a validated configuration: [`SolverConfig::new`] panics
    /// on a non-positive tolerance or iteration cap.
    pub fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig::new(self.tolerance, self.max_iterations)
            .with_error_measure(self.error_measure)
    }

    /// Point validator honouring `max_points`.
    pub fn validator(&self) -> PointSetValidator {
        PointSetValidator::new(self.max_points)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

fn parse_override<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Env(format!("{}='{}' is not a valid value", key, value)))
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unusable environment override
    #[error("Environment override error: {0}")]
    Env(String),

    /// Validation errors
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = NumericsConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.max_points, 8);
        assert_eq!(config.tolerance, 1e-7);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.relaxation_factor, 1.2);
        assert_eq!(config.error_measure, ErrorMeasure::Absolute);
        assert_eq!(config.root_policy, SelectionPolicy::IterationCount);
        assert_eq!(config.linear_policy, SelectionPolicy::ErrorThenIterations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tolerance = 1e-10").unwrap();
        writeln!(file, "error_measure = \"relative\"").unwrap();
        writeln!(file, "root_policy = \"error-then-iterations\"").unwrap();

        let config = NumericsConfig::load(file.path()).unwrap();
        assert_eq!(config.tolerance, 1e-10);
        assert_eq!(config.error_measure, ErrorMeasure::Relative);
        assert_eq!(config.root_policy, SelectionPolicy::ErrorThenIterations);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tolerance = \"tight\"").unwrap();
        assert!(matches!(
            NumericsConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = NumericsConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, NumericsConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = NumericsConfig::default()
            .with_overrides(lookup(&[
                ("NUMERICS_LOG_LEVEL", "debug"),
                ("NUMERICS_MAX_ITERATIONS", "250"),
                ("NUMERICS_ERROR_MEASURE", "Relative"),
                ("NUMERICS_LINEAR_POLICY", "iterations"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_iterations, 250);
        assert_eq!(config.error_measure, ErrorMeasure::Relative);
        assert_eq!(config.linear_policy, SelectionPolicy::IterationCount);
        assert_eq!(config.tolerance, 1e-7);
    }

    #[test]
    fn test_bad_override_is_reported() {
        let err = NumericsConfig::default()
            .with_overrides(lookup(&[("NUMERICS_TOLERANCE", "small")]))
            .unwrap_err();
        assert!(err.to_string().contains("NUMERICS_TOLERANCE"));
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let config = NumericsConfig {
            log_level: "loud".to_string(),
            max_points: 0,
            tolerance: -1.0,
            max_iterations: 0,
            relaxation_factor: 2.5,
            ..NumericsConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 5),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_solver_config_and_validator() {
        let config = NumericsConfig {
            tolerance: 1e-9,
            max_iterations: 42,
            max_points: 5,
            ..NumericsConfig::default()
        };
        let solver = config.solver_config();
        assert_eq!(solver.tolerance, 1e-9);
        assert_eq!(solver.max_iterations, 42);
        assert_eq!(config.validator().max_points(), 5);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = NumericsConfig {
            relaxation_factor: 1.5,
            ..NumericsConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("root_policy = \"iteration-count\""));
        let parsed: NumericsConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
