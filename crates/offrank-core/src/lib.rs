//! # offrank-core
//!
//! Relevance scoring from full-text-search `offsets()` metadata.
//! Parses the offsets text into match records and folds their match lengths
//! into a single integer score, optionally capped by a term-length hint.
//!
//! Host integration (SQLite) lives in `offrank-sqlite`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod offsets;
pub mod rank;
pub mod tracing;

pub use config::OffrankConfig;
pub use errors::{ParseError, TokenFault};
pub use offsets::{MatchRecord, ParseStep, RecordParser};
pub use rank::{score, score_str, RankReducer, RelevanceScore, TermLengthHint};
