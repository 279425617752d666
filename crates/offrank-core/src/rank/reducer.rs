//! RankReducer: sum match lengths, then apply the term-length ceiling.

use std::fmt;

use crate::constants::ABSENT_INPUT_SCORE;
use crate::errors::ParseError;
use crate::offsets::MatchRecord;

use super::hint::TermLengthHint;

/// Final relevance score. Larger means more relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RelevanceScore(u64);

impl RelevanceScore {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Value as a SQL integer, saturating at `i64::MAX`.
    pub fn to_sql_int(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for RelevanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<RelevanceScore> for u64 {
    fn from(score: RelevanceScore) -> Self {
        score.0
    }
}

/// Folds match records into a `RelevanceScore`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankReducer {
    hint: TermLengthHint,
}

impl RankReducer {
    pub fn new(hint: TermLengthHint) -> Self {
        Self { hint }
    }

    /// Score for a row with no offsets metadata.
    pub fn absent(&self) -> RelevanceScore {
        RelevanceScore(ABSENT_INPUT_SCORE)
    }

    /// Sum every record's match length and clamp against the hint.
    /// Stops at the first error; no partial score is produced.
    pub fn reduce<I>(&self, records: I) -> Result<RelevanceScore, ParseError>
    where
        I: IntoIterator<Item = Result<MatchRecord, ParseError>>,
    {
        let mut sum: u64 = 0;
        for record in records {
            sum = sum.saturating_add(record?.match_length);
        }
        Ok(self.clamp(sum))
    }

    /// Apply the ceiling: a positive hint below the sum caps it at `hint - 1`.
    pub fn clamp(&self, sum: u64) -> RelevanceScore {
        match self.hint.ceiling() {
            Some(ceiling) if sum > ceiling => RelevanceScore(ceiling - 1),
            _ => RelevanceScore(sum),
        }
    }
}
