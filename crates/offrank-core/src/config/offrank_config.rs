//! Top-level offrank configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FunctionConfig, LoggingConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`OFFRANK_*`)
/// 2. Project config (`offrank.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OffrankConfig {
    pub function: FunctionConfig,
    pub logging: LoggingConfig,
}

impl OffrankConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &OffrankConfig) -> Result<(), ConfigError> {
        let name = config.function.effective_name();
        if !is_sql_identifier(name) {
            return Err(ConfigError::ValidationFailed {
                field: "function.name".to_string(),
                message: format!("'{name}' is not a plain SQL identifier"),
            });
        }
        if config.logging.effective_filter().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "logging.filter".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut OffrankConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: OffrankConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut OffrankConfig, other: &OffrankConfig) {
        if other.function.name.is_some() {
            base.function.name = other.function.name.clone();
        }
        if other.function.deterministic.is_some() {
            base.function.deterministic = other.function.deterministic;
        }
        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `OFFRANK_FUNCTION_NAME`, `OFFRANK_FUNCTION_DETERMINISTIC`, `OFFRANK_LOG_FILTER`.
    fn apply_env_overrides(config: &mut OffrankConfig) {
        if let Ok(val) = std::env::var("OFFRANK_FUNCTION_NAME") {
            config.function.name = Some(val);
        }
        if let Ok(val) = std::env::var("OFFRANK_FUNCTION_DETERMINISTIC") {
            if let Ok(v) = val.parse::<bool>() {
                config.function.deterministic = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OFFRANK_LOG_FILTER") {
            config.logging.filter = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
