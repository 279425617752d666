//! The `offsets_rank()` scalar function.

use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::Connection;

use offrank_core::config::{FunctionConfig, OffrankConfig};
use offrank_core::rank::{self, TermLengthHint};

use crate::errors::SqliteError;
use crate::values::{offsets_bytes, term_length_hint};

/// Variadic: `offsets_rank(offsets [, term_len [, ...]])`.
const N_ARG_VARIADIC: i32 = -1;

/// Register `offsets_rank` with default settings.
pub fn register_offsets_rank(conn: &Connection) -> Result<(), SqliteError> {
    register_with_config(conn, &FunctionConfig::default())
}

/// Register using the function section of a loaded `OffrankConfig`.
pub fn register_from_config(conn: &Connection, config: &OffrankConfig) -> Result<(), SqliteError> {
    register_with_config(conn, &config.function)
}

/// Register the scoring function under the configured name.
pub fn register_with_config(conn: &Connection, config: &FunctionConfig) -> Result<(), SqliteError> {
    let name = config.effective_name().to_string();
    let mut flags = FunctionFlags::SQLITE_UTF8;
    if config.effective_deterministic() {
        flags |= FunctionFlags::SQLITE_DETERMINISTIC;
    }

    let fn_name = name.clone();
    conn.create_scalar_function(name.as_str(), N_ARG_VARIADIC, flags, move |ctx| {
        offsets_rank(ctx, &fn_name)
    })
    .map_err(|e| SqliteError::Registration {
        function: name.clone(),
        message: e.to_string(),
    })?;

    tracing::info!(
        function = %name,
        deterministic = config.effective_deterministic(),
        "registered scalar function"
    );
    Ok(())
}

/// One invocation per candidate row.
fn offsets_rank(ctx: &Context<'_>, fn_name: &str) -> rusqlite::Result<i64> {
    if ctx.is_empty() {
        return Err(rusqlite::Error::UserFunctionError(Box::new(
            SqliteError::MissingArgument {
                function: fn_name.to_string(),
            },
        )));
    }

    let offsets = offsets_bytes(ctx.get_raw(0));
    let hint = if ctx.len() > 1 {
        term_length_hint(ctx.get_raw(1))
    } else {
        TermLengthHint::NONE
    };

    match rank::score(offsets.as_deref(), hint) {
        Ok(score) => {
            tracing::trace!(score = score.value(), hint = hint.value(), "scored row");
            Ok(score.to_sql_int())
        }
        Err(e) => {
            tracing::debug!(error = %e, "rejecting malformed offsets");
            Err(rusqlite::Error::UserFunctionError(Box::new(e)))
        }
    }
}
