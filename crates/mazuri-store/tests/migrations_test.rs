// Integration tests for the migration framework

use mazuri_store::migrations::{apply_migrations, get_migrations};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

fn get_column_names(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", table))
        .unwrap();
    stmt.query_map([], |row| row.get(1))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = apply_migrations(&mut conn);
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());

    // Then: The three record tables exist alongside the bookkeeping tables
    let tables = get_table_names(&conn);
    let expected_tables = vec![
        "schema_version",
        "cocktails",
        "customers",
        "orders",
        "sqlite_sequence", // Auto-created by SQLite for AUTOINCREMENT columns
    ];
    assert_eq!(tables.len(), expected_tables.len(), "Tables: {:?}", tables);
    for expected_table in &expected_tables {
        assert!(
            tables.contains(&expected_table.to_string()),
            "Missing table: {}",
            expected_table
        );
    }
}

#[test]
fn test_orders_has_completion_column() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    let columns = get_column_names(&conn, "orders");
    assert!(columns.contains(&"completed_at".to_string()));
    assert!(columns.contains(&"status".to_string()));
}

#[test]
fn test_one_version_row_per_migration() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version_count, get_migrations().len() as i64);
}

#[test]
fn test_migration_idempotency_keeps_data() {
    // Given: A database with migrations applied and a record inserted
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    conn.execute(
        "INSERT INTO cocktails (name, ingredients, price, created_at) VALUES ('Mojito', 'rum', 8.5, 0)",
        [],
    )
    .unwrap();

    // When: Migrations are applied again
    apply_migrations(&mut conn).unwrap();

    // Then: Nothing was dropped or duplicated
    let cocktails: i64 = conn
        .query_row("SELECT COUNT(*) FROM cocktails", [], |row| row.get(0))
        .unwrap();
    let versions: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(cocktails, 1);
    assert_eq!(versions, get_migrations().len() as i64);
}

#[test]
fn test_migrations_survive_reopen_on_disk() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("bar.db");

    {
        let mut conn = mazuri_store::open_session(&db_path).unwrap();
        mazuri_store::initialize(&mut conn).unwrap();
    }

    let mut conn = mazuri_store::open_session(&db_path).unwrap();
    assert!(mazuri_store::initialize(&mut conn).is_ok());
    assert!(get_table_names(&conn).contains(&"orders".to_string()));
}
