//! Configuration management for the qenc CLI.
//!
//! Supports loading configuration from:
//! 1. A YAML file (`--config`, or `~/.qenc/config.yaml` when present)
//! 2. Environment variables (with QENC_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest register the simulator may be configured for.
pub const MAX_SIMULATOR_QUBITS: u32 = qenc_sim::MAX_SUPPORTED_QUBITS;

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub simulator: SimulatorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Defaults for `qenc verify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Largest accepted amplitude deviation
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Number of trials
    #[serde(default = "default_trials")]
    pub trials: usize,

    /// Length of random vectors when `--random` is given without a value
    #[serde(default = "default_random_length")]
    pub random_length: usize,
}

/// Statevector backend limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_max_qubits")]
    pub max_qubits: u32,
}

/// Output defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "table", "json" or "qasm"
    #[serde(default = "default_output_format")]
    pub format: String,

    /// Decimal places in table output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_trials() -> usize {
    1
}

fn default_random_length() -> usize {
    30
}

fn default_max_qubits() -> u32 {
    qenc_sim::DEFAULT_MAX_QUBITS
}

fn default_output_format() -> String {
    "table".to_string()
}

fn default_precision() -> usize {
    4
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            trials: default_trials(),
            random_length: default_random_length(),
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: default_max_qubits(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            precision: default_precision(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;

        let config: Config =
            serde_yaml_ng::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Default config file location (`~/.qenc/config.yaml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".qenc").join("config.yaml"))
    }

    /// Load configuration with the following precedence:
    /// 1. Load from `config_file`, or from the default path if it exists
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => Config::default(),
            },
        };

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge environment variables into this configuration.
    fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`.
    ///
    /// Only variables that are set override the current values. Numeric
    /// variables that fail to parse are ignored.
    fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Logging
        if let Some(v) = lookup("QENC_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("QENC_LOG_FORMAT") {
            self.logging.format = v;
        }

        // Verify
        if let Some(val) = lookup("QENC_TOLERANCE").and_then(|v| v.parse().ok()) {
            self.verify.tolerance = val;
        }

        // Simulator
        if let Some(val) = lookup("QENC_MAX_QUBITS").and_then(|v| v.parse().ok()) {
            self.simulator.max_qubits = val;
        }

        // Output
        if let Some(v) = lookup("QENC_OUTPUT_FORMAT") {
            self.output.format = v;
        }
        if let Some(val) = lookup("QENC_PRECISION").and_then(|v| v.parse().ok()) {
            self.output.precision = val;
        }

        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        match self.output.format.as_str() {
            "table" | "json" | "qasm" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Invalid output format: {other}"
                )));
            }
        }

        if self.verify.tolerance.is_nan() || self.verify.tolerance <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "tolerance must be positive, got {}",
                self.verify.tolerance
            )));
        }

        if self.verify.trials == 0 {
            return Err(ConfigError::Validation(
                "trials must be greater than 0".to_string(),
            ));
        }

        if self.simulator.max_qubits == 0 || self.simulator.max_qubits > MAX_SIMULATOR_QUBITS {
            return Err(ConfigError::Validation(format!(
                "max_qubits must be between 1 and {MAX_SIMULATOR_QUBITS}, got {}",
                self.simulator.max_qubits
            )));
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "console");
        assert_eq!(config.verify.tolerance, 1e-6);
        assert_eq!(config.verify.random_length, 30);
        assert_eq!(config.simulator.max_qubits, 24);
        assert_eq!(config.output.format, "table");
        assert_eq!(config.output.precision, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "verify:\n  tolerance: 1.0e-8\noutput:\n  format: json\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.verify.tolerance, 1e-8);
        assert_eq!(config.verify.trials, 1);
        assert_eq!(config.output.format, "json");
        assert_eq!(config.output.precision, 4);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "simulator: [not, a, map]\n").unwrap();
        assert!(matches!(Config::from_file(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = Config::default().merge_vars(vars(&[
            ("QENC_LOG_LEVEL", "debug"),
            ("QENC_TOLERANCE", "0.001"),
            ("QENC_MAX_QUBITS", "12"),
            ("QENC_PRECISION", "not-a-number"),
        ]));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.verify.tolerance, 0.001);
        assert_eq!(config.simulator.max_qubits, 12);
        assert_eq!(config.output.precision, 4);
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_max_qubits_bounds() {
        let mut config = Config::default();
        config.simulator.max_qubits = 0;
        assert!(config.validate().is_err());
        config.simulator.max_qubits = 31;
        assert!(config.validate().is_err());
        config.simulator.max_qubits = 30;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_tolerance() {
        let mut config = Config::default();
        config.verify.tolerance = 0.0;
        assert!(config.validate().is_err());
        config.verify.tolerance = f64::NAN;
        assert!(config.validate().is_err());
    }
}
