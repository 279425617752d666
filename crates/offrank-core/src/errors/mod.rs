//! Error handling for offrank.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod parse_error;

pub use config_error::ConfigError;
pub use error_code::OffrankErrorCode;
pub use parse_error::{ParseError, TokenFault};
