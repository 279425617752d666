//! OffrankErrorCode trait for host-facing error strings.

/// Structured error code for errors that cross into a host engine.
/// Every error enum implements this so the host sees a stable code prefix.
pub trait OffrankErrorCode {
    /// Returns the error code string (e.g., "MALFORMED_TOKEN").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MALFORMED_TOKEN: &str = "MALFORMED_TOKEN";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SQLITE_ERROR: &str = "SQLITE_ERROR";
pub const MISSING_ARGUMENT: &str = "MISSING_ARGUMENT";
pub const INVALID_IDENTIFIER: &str = "INVALID_IDENTIFIER";
