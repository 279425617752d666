//! SQLite loadable-extension entry point.
//!
//! Built with the `loadable_extension` feature, the cdylib exports
//! `sqlite3_extension_init`, so a host loads it with
//! `SELECT load_extension('liboffrank_sqlite')` and gets `offsets_rank()`
//! on that connection.

use rusqlite::Connection;

use crate::function::register_offsets_rank;

/// Register the extension's functions on `conn`.
///
/// Returns `false`: the functions live only as long as the connection, so the
/// library need not stay loaded permanently.
pub fn init_extension(conn: &Connection) -> rusqlite::Result<bool> {
    register_offsets_rank(conn).map_err(|e| rusqlite::Error::UserFunctionError(Box::new(e)))?;
    Ok(false)
}

/// # Safety
///
/// Called by SQLite's `load_extension` with a valid connection handle, error
/// message slot, and API routine table.
#[cfg(feature = "loadable_extension")]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[no_mangle]
pub unsafe extern "C" fn sqlite3_extension_init(
    db: *mut rusqlite::ffi::sqlite3,
    pz_err_msg: *mut *mut std::os::raw::c_char,
    p_api: *mut rusqlite::ffi::sqlite3_api_routines,
) -> std::os::raw::c_int {
    Connection::extension_init2(db, pz_err_msg, p_api, |conn| init_extension(&conn))
}
