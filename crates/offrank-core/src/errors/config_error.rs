//! Errors from loading `offrank.toml` and `OFFRANK_*` overrides.

use super::error_code::{self, OffrankErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The project file exists but could not be read.
    #[error("offrank config unreadable at {path}")]
    FileNotFound { path: String },

    /// TOML syntax or type mismatch. `path` is `<string>` for in-memory input.
    #[error("invalid offrank config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("offrank config field {field} rejected: {message}")]
    ValidationFailed { field: String, message: String },
}

impl OffrankErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
