//! Bounded decimal token decoding.

use crate::constants::MAX_TOKEN_DIGITS;
use crate::errors::{ParseError, TokenFault};

/// Decode one decimal token.
///
/// `offset` is the token's byte position in the full offsets text and is only
/// used for error reporting. The token must be 1..=`MAX_TOKEN_DIGITS` ASCII
/// digits. Values past `u64::MAX` saturate; every token within the digit limit
/// fits the `u128` accumulator.
pub fn decode_token(token: &[u8], offset: usize) -> Result<u64, ParseError> {
    let fail = |fault| ParseError::MalformedToken { offset, fault };

    if token.is_empty() {
        return Err(fail(TokenFault::Empty));
    }
    if token.len() > MAX_TOKEN_DIGITS {
        return Err(fail(TokenFault::TooLong {
            digits: token.len(),
            max: MAX_TOKEN_DIGITS,
        }));
    }

    let mut value: u128 = 0;
    for &byte in token {
        if !byte.is_ascii_digit() {
            return Err(fail(TokenFault::NonDigit { byte }));
        }
        value = value * 10 + u128::from(byte - b'0');
    }
    Ok(u64::try_from(value).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_digits() {
        assert_eq!(decode_token(b"0", 0), Ok(0));
        assert_eq!(decode_token(b"42", 0), Ok(42));
        assert_eq!(decode_token(b"007", 0), Ok(7));
    }

    #[test]
    fn values_past_u64_saturate() {
        assert_eq!(decode_token(b"18446744073709551615", 0), Ok(u64::MAX));
        assert_eq!(decode_token(b"18446744073709551616", 3), Ok(u64::MAX));
    }

    #[test]
    fn full_width_token_at_the_digit_limit_decodes() {
        let at_limit = [b'9'; MAX_TOKEN_DIGITS];
        assert_eq!(decode_token(&at_limit, 0), Ok(u64::MAX));
    }

    #[test]
    fn digit_limit_is_checked_before_value() {
        let long = [b'0'; MAX_TOKEN_DIGITS + 1];
        assert_eq!(
            decode_token(&long, 0),
            Err(ParseError::MalformedToken {
                offset: 0,
                fault: TokenFault::TooLong {
                    digits: MAX_TOKEN_DIGITS + 1,
                    max: MAX_TOKEN_DIGITS
                }
            })
        );
        // Leading zeros keep the value small, so the limit itself is the only check.
        let at_limit = [b'0'; MAX_TOKEN_DIGITS];
        assert_eq!(decode_token(&at_limit, 0), Ok(0));
    }

    #[test]
    fn rejects_signs_and_letters() {
        assert!(matches!(
            decode_token(b"-1", 0),
            Err(ParseError::MalformedToken {
                fault: TokenFault::NonDigit { byte: b'-' },
                ..
            })
        ));
        assert!(matches!(
            decode_token(b"5x", 0),
            Err(ParseError::MalformedToken {
                fault: TokenFault::NonDigit { byte: b'x' },
                ..
            })
        ));
    }
}
