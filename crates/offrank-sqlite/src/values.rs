//! Marshalling SQLite argument values into scoring inputs.
//!
//! Mirrors how the C API coerces values: offsets are read the way
//! `sqlite3_value_text` would present them, the hint the way
//! `sqlite3_value_int` would, except that the hint keeps 64 bits instead of
//! truncating to a C `int`. A hint above `i32::MAX` therefore stays a large
//! ceiling rather than wrapping to an arbitrary one.

use std::borrow::Cow;

use rusqlite::types::ValueRef;

use offrank_core::rank::TermLengthHint;

/// Offsets argument as bytes. `None` for SQL `NULL`.
pub fn offsets_bytes<'a>(value: ValueRef<'a>) -> Option<Cow<'a, [u8]>> {
    match value {
        ValueRef::Null => None,
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(Cow::Borrowed(bytes)),
        ValueRef::Integer(i) => Some(Cow::Owned(i.to_string().into_bytes())),
        // SQLite renders reals with a decimal point or exponent ("5.0"), so
        // they never decode as offsets; `{:?}` keeps that property.
        ValueRef::Real(f) => Some(Cow::Owned(format!("{f:?}").into_bytes())),
    }
}

/// Term-length hint argument. Text and blobs are read as a leading integer;
/// anything without one reads as 0.
pub fn term_length_hint(value: ValueRef<'_>) -> TermLengthHint {
    let raw = match value {
        ValueRef::Integer(i) => i,
        // `as` saturates and maps NaN to 0, matching C truncation for in-range values.
        ValueRef::Real(f) => f as i64,
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => leading_integer(bytes),
        ValueRef::Null => 0,
    };
    TermLengthHint::from_raw(raw)
}

/// Parse an optional sign and leading decimal digits after leading spaces.
fn leading_integer(bytes: &[u8]) -> i64 {
    let mut rest = bytes;
    while let [b' ' | b'\t' | b'\n' | b'\r', tail @ ..] = rest {
        rest = tail;
    }
    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for &b in rest.iter().take_while(|b| b.is_ascii_digit()) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        -value
    } else {
        value
    }
}
