//! Property tests: the SQL function agrees with the core scorer.

use proptest::prelude::*;
use rusqlite::Connection;

use offrank_core::rank::score_str;
use offrank_sqlite::register_offsets_rank;

proptest! {
    #[test]
    fn prop_sql_matches_core(
        lengths in prop::collection::vec(0u32..10_000, 0..16),
        hint in proptest::option::of(-10i64..20_000),
    ) {
        let text = lengths
            .iter()
            .enumerate()
            .map(|(i, l)| format!("0 {i} {} {l}", i * 10))
            .collect::<Vec<_>>()
            .join(" ");

        let conn = Connection::open_in_memory().unwrap();
        register_offsets_rank(&conn).unwrap();
        let sql: i64 = conn
            .query_row(
                "SELECT offsets_rank(?1, ?2)",
                rusqlite::params![text, hint],
                |row| row.get(0),
            )
            .unwrap();

        let core = score_str(Some(&text), hint).unwrap();
        prop_assert_eq!(sql, core.to_sql_int());
    }
}
