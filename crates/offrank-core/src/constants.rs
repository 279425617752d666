/// offrank version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name the scoring function is registered under by default.
pub const DEFAULT_FUNCTION_NAME: &str = "offsets_rank";

/// Integers per match record: column, term, byte offset, match length.
pub const FIELDS_PER_RECORD: usize = 4;

/// Longest accepted decimal token. Tokens longer than this are malformed.
pub const MAX_TOKEN_DIGITS: usize = 31;

/// Score returned when the host supplies no offsets at all (SQL `NULL`).
///
/// Compatibility policy: a row reported as matched but without offset
/// metadata ranks as minimally relevant instead of zero.
pub const ABSENT_INPUT_SCORE: u64 = 1;

/// Separator between integers in offsets text.
pub const TOKEN_SEPARATOR: u8 = b' ';

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "offrank=info";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "OFFRANK_LOG";

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "offrank.toml";
