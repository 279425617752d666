//! Offsets parsing errors.

use super::error_code::{self, OffrankErrorCode};

/// Why a single integer token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenFault {
    #[error("empty token")]
    Empty,

    #[error("non-digit byte 0x{byte:02x}")]
    NonDigit { byte: u8 },

    #[error("{digits} digits exceeds the limit of {max}")]
    TooLong { digits: usize, max: usize },
}

/// Errors raised while decoding offsets text.
/// Any of these fails the whole scoring call; there is no partial score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed token at byte {offset}: {fault}")]
    MalformedToken { offset: usize, fault: TokenFault },
}

impl ParseError {
    /// Byte offset of the offending token within the offsets text.
    pub fn offset(&self) -> usize {
        match self {
            Self::MalformedToken { offset, .. } => *offset,
        }
    }
}

impl OffrankErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_TOKEN
    }
}
