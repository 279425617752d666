//! Offsets metadata decoding.
//!
//! FTS `offsets()` text is a run of space-separated decimal integers, four per
//! matched term occurrence: `column term byte_offset match_length`.

pub mod parser;
pub mod record;
pub mod token;

pub use parser::{ParseStep, RecordParser};
pub use record::MatchRecord;
pub use token::decode_token;
