//! Error handling for mazuri-store
//!
//! Maps SQLite failures onto the shared `MazuriError` taxonomy

use mazuri_core::errors::MazuriError;

/// Result type alias using MazuriError
pub type Result<T> = std::result::Result<T, MazuriError>;

const UNIQUE_PREFIX: &str = "UNIQUE constraint failed: ";

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> MazuriError {
    MazuriError::Persistence {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a checksum mismatch error for an already-applied migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> MazuriError {
    MazuriError::Persistence {
        message: format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ),
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> MazuriError {
    MazuriError::Persistence {
        message: err.to_string(),
    }
}

/// The `table.column` named by a UNIQUE constraint failure, if `err` is one
pub fn unique_violation(err: &rusqlite::Error) -> Option<&str> {
    match err {
        rusqlite::Error::SqliteFailure(e, Some(msg))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            msg.strip_prefix(UNIQUE_PREFIX)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_unique_violation_names_column() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();
        let err = conn
            .execute("INSERT INTO t VALUES ('a')", [])
            .unwrap_err();
        assert_eq!(unique_violation(&err), Some("t.name"));
    }

    #[test]
    fn test_other_errors_are_not_unique_violations() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn.execute("INSERT INTO missing VALUES (1)", []).unwrap_err();
        assert_eq!(unique_violation(&err), None);
        assert!(matches!(
            from_rusqlite(err),
            MazuriError::Persistence { .. }
        ));
    }
}
