//! FTS match queries ordered by `offsets_rank()`.

use rusqlite::{params, Connection};

use offrank_core::config::offrank_config::is_sql_identifier;
use offrank_core::config::FunctionConfig;

use crate::errors::SqliteError;
use crate::to_sqlite_err;

/// A matching row and its relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMatch {
    pub docid: i64,
    pub score: i64,
}

/// Run `match_expr` against an FTS3/FTS4 `table` and return rows ordered
/// from most to least relevant. Ties break on ascending docid.
///
/// `function` must match the config the scorer was registered with.
pub fn rank_matches(
    conn: &Connection,
    function: &FunctionConfig,
    table: &str,
    match_expr: &str,
    term_len: Option<i64>,
    limit: usize,
) -> Result<Vec<RankedMatch>, SqliteError> {
    let rank_fn = function.effective_name();
    for name in [rank_fn, table] {
        if !is_sql_identifier(name) {
            return Err(SqliteError::InvalidIdentifier {
                name: name.to_string(),
            });
        }
    }

    let sql = format!(
        "SELECT docid, {rank_fn}(offsets({table}), ?2) AS score
         FROM {table}
         WHERE {table} MATCH ?1
         ORDER BY score DESC, docid ASC
         LIMIT ?3"
    );
    let mut stmt = conn.prepare(&sql).map_err(to_sqlite_err)?;
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);

    let rows = stmt
        .query_map(params![match_expr, term_len, limit], |row| {
            Ok(RankedMatch {
                docid: row.get(0)?,
                score: row.get(1)?,
            })
        })
        .map_err(to_sqlite_err)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(to_sqlite_err)?);
    }
    Ok(results)
}
