//! # offrank-sqlite
//!
//! Registers `offsets_rank()` as a SQLite scalar function so FTS3/FTS4
//! queries can order by match-length relevance:
//!
//! ```sql
//! SELECT docid FROM docs WHERE docs MATCH 'sleeping'
//! ORDER BY offsets_rank(offsets(docs)) DESC;
//! ```
//!
//! Register from Rust with [`register_offsets_rank`], or build the cdylib
//! with the `loadable_extension` feature and load it into any SQLite host.

pub mod errors;
pub mod extension;
pub mod function;
pub mod queries;
pub mod values;

pub use errors::SqliteError;
pub use extension::init_extension;
pub use function::{register_from_config, register_offsets_rank, register_with_config};
pub use queries::{rank_matches, RankedMatch};

pub(crate) fn to_sqlite_err(e: rusqlite::Error) -> SqliteError {
    SqliteError::Query {
        message: e.to_string(),
    }
}
