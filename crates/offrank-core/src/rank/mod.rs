//! Match-length relevance ranking: reduce parsed records to one score.

pub mod hint;
pub mod reducer;

pub use hint::TermLengthHint;
pub use reducer::{RankReducer, RelevanceScore};

use crate::errors::ParseError;
use crate::offsets::RecordParser;

/// Score one row's offsets text.
///
/// `None` means the host had no offsets for the row and yields
/// `ABSENT_INPUT_SCORE` whatever the hint. Present text is parsed and reduced;
/// the first malformed token fails the call.
pub fn score(offsets: Option<&[u8]>, hint: TermLengthHint) -> Result<RelevanceScore, ParseError> {
    let reducer = RankReducer::new(hint);
    match offsets {
        None => Ok(reducer.absent()),
        Some(text) => reducer.reduce(RecordParser::new(text)),
    }
}

/// `score` over string input with a raw integer hint.
pub fn score_str(offsets: Option<&str>, hint: Option<i64>) -> Result<RelevanceScore, ParseError> {
    score(
        offsets.map(str::as_bytes),
        hint.map(TermLengthHint::from_raw).unwrap_or_default(),
    )
}
