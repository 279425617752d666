//! SQLite integration errors.

use offrank_core::errors::error_code::{self, OffrankErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SqliteError {
    #[error("failed to register function {function}: {message}")]
    Registration { function: String, message: String },

    #[error("SQLite query failed: {message}")]
    Query { message: String },

    #[error("{function}() requires the offsets argument")]
    MissingArgument { function: String },

    #[error("invalid SQL identifier: '{name}'")]
    InvalidIdentifier { name: String },
}

impl OffrankErrorCode for SqliteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Registration { .. } | Self::Query { .. } => error_code::SQLITE_ERROR,
            Self::MissingArgument { .. } => error_code::MISSING_ARGUMENT,
            Self::InvalidIdentifier { .. } => error_code::INVALID_IDENTIFIER,
        }
    }
}
