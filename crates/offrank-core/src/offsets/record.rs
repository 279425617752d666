use crate::constants::FIELDS_PER_RECORD;

/// One decoded match: a single term occurrence inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchRecord {
    /// Column the match was found in.
    pub column_index: u64,
    /// Index of the query term that matched.
    pub term_index: u64,
    /// Byte offset of the match within the column text.
    pub byte_offset: u64,
    /// Byte length of the matched span.
    pub match_length: u64,
}

impl MatchRecord {
    pub fn from_fields(fields: [u64; FIELDS_PER_RECORD]) -> Self {
        let [column_index, term_index, byte_offset, match_length] = fields;
        Self {
            column_index,
            term_index,
            byte_offset,
            match_length,
        }
    }
}
