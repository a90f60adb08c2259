//! Database connection management
//!
//! A session is an owned SQLite connection. Each command opens one, takes a
//! single transaction from it and drops it when done; nothing is shared
//! between invocations.

use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use std::path::Path;

/// Open a configured session against the database file at `path`
///
/// The file is created if it does not exist. Call [`initialize`] before the
/// first command so the tables are present.
pub fn open_session<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open a configured in-memory session (for testing)
pub fn open_in_memory_session() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite)
}

/// Ensure every table exists
///
/// Idempotent and safe on every startup: applies only migrations that have
/// not run yet and never drops data.
pub fn initialize(conn: &mut Connection) -> Result<()> {
    apply_migrations(conn)?;
    tracing::debug!("database schema ready");
    Ok(())
}
