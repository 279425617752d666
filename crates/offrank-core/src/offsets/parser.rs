//! RecordParser: lazy, left-to-right decoding of offsets text into match records.

use memchr::memchr;

use crate::constants::{FIELDS_PER_RECORD, TOKEN_SEPARATOR};
use crate::errors::ParseError;

use super::record::MatchRecord;
use super::token::decode_token;

/// Outcome of a single parser step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStep {
    /// A complete four-field record was decoded.
    Record(MatchRecord),
    /// Input exhausted. Any incomplete trailing group has been discarded.
    EndOfInput,
    /// A token failed to decode. The parser yields nothing further.
    Error(ParseError),
}

/// Decodes offsets text one record at a time.
///
/// Not restartable: once it reports `EndOfInput` or `Error` every further
/// step reports `EndOfInput`. Build a new parser to re-read the text.
#[derive(Debug, Clone)]
pub struct RecordParser<'a> {
    input: &'a [u8],
    pos: usize,
    finished: bool,
}

impl<'a> RecordParser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            finished: false,
        }
    }

    pub fn from_text(input: &'a str) -> Self {
        Self::new(input.as_bytes())
    }

    /// Byte position of the next unread token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Decode the next record.
    pub fn step(&mut self) -> ParseStep {
        if self.finished {
            return ParseStep::EndOfInput;
        }

        let mut fields = [0u64; FIELDS_PER_RECORD];
        let mut count = 0;
        while count < FIELDS_PER_RECORD {
            let Some((token, offset)) = self.next_token() else {
                if count > 0 {
                    ::tracing::trace!(
                        fields = count,
                        "discarding incomplete trailing offsets group"
                    );
                }
                self.finished = true;
                return ParseStep::EndOfInput;
            };
            match decode_token(token, offset) {
                Ok(value) => fields[count] = value,
                Err(e) => {
                    self.finished = true;
                    return ParseStep::Error(e);
                }
            }
            count += 1;
        }

        ParseStep::Record(MatchRecord::from_fields(fields))
    }

    /// Split off the next separator-delimited token and its starting offset.
    /// Returns `None` only when the cursor is at the end of input, so a
    /// single trailing separator ends input cleanly while doubled separators
    /// produce an empty (malformed) token.
    fn next_token(&mut self) -> Option<(&'a [u8], usize)> {
        let start = self.pos;
        if start >= self.input.len() {
            return None;
        }
        let rest = &self.input[start..];
        match memchr(TOKEN_SEPARATOR, rest) {
            Some(len) => {
                self.pos = start + len + 1;
                Some((&rest[..len], start))
            }
            None => {
                self.pos = self.input.len();
                Some((rest, start))
            }
        }
    }
}

impl Iterator for RecordParser<'_> {
    type Item = Result<MatchRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            ParseStep::Record(record) => Some(Ok(record)),
            ParseStep::Error(e) => Some(Err(e)),
            ParseStep::EndOfInput => None,
        }
    }
}

impl std::iter::FusedIterator for RecordParser<'_> {}
