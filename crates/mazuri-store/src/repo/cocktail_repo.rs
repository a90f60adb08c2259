//! Cocktail persistence

use crate::errors::{from_rusqlite, unique_violation, Result};
use crate::repo::rows::{cocktail_at, to_millis, COCKTAIL_COLUMNS};
use chrono::{DateTime, Utc};
use mazuri_core::errors::MazuriError;
use mazuri_core::model::{Cocktail, CocktailFilter, NewCocktail};
use rusqlite::{Connection, OptionalExtension};

/// SQLite repository for cocktails
pub struct CocktailRepo;

impl CocktailRepo {
    /// Insert a cocktail and return its generated id
    ///
    /// # Errors
    ///
    /// `DuplicateCocktailName` when the name is taken, `Persistence` otherwise.
    pub fn insert(conn: &Connection, cocktail: &NewCocktail, created_at: DateTime<Utc>) -> Result<i64> {
        conn.execute(
            "INSERT INTO cocktails (name, ingredients, price, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                cocktail.name,
                cocktail.ingredients,
                cocktail.price,
                cocktail.category,
                to_millis(&created_at),
            ],
        )
        .map_err(|e| write_error(e, &cocktail.name))?;

        Ok(conn.last_insert_rowid())
    }

    /// Get a cocktail by ID
    pub fn get(conn: &Connection, id: i64) -> Result<Option<Cocktail>> {
        conn.query_row(
            &format!("SELECT {} FROM cocktails WHERE id = ?1", COCKTAIL_COLUMNS),
            [id],
            |row| cocktail_at(row, 0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List cocktails matching every present filter, ordered by id
    pub fn list(conn: &Connection, filter: &CocktailFilter) -> Result<Vec<Cocktail>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM cocktails
                 WHERE (?1 IS NULL OR instr(lower(name), lower(?1)) > 0)
                   AND (?2 IS NULL OR instr(lower(COALESCE(category, '')), lower(?2)) > 0)
                   AND (?3 IS NULL OR price <= ?3)
                 ORDER BY id",
                COCKTAIL_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let cocktails = stmt
            .query_map(
                rusqlite::params![filter.name, filter.category, filter.max_price],
                |row| cocktail_at(row, 0),
            )
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(cocktails)
    }

    /// Write every mutable column of `cocktail` back to its row
    pub fn update(conn: &Connection, cocktail: &Cocktail) -> Result<()> {
        conn.execute(
            "UPDATE cocktails SET name = ?1, ingredients = ?2, price = ?3, category = ?4
             WHERE id = ?5",
            rusqlite::params![
                cocktail.name,
                cocktail.ingredients,
                cocktail.price,
                cocktail.category,
                cocktail.id,
            ],
        )
        .map_err(|e| write_error(e, &cocktail.name))?;

        Ok(())
    }

    /// Delete by id, returning whether a row was removed
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let removed = conn
            .execute("DELETE FROM cocktails WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(removed > 0)
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM cocktails", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}

fn write_error(err: rusqlite::Error, name: &str) -> MazuriError {
    match unique_violation(&err) {
        Some("cocktails.name") => MazuriError::DuplicateCocktailName {
            name: name.to_string(),
        },
        _ => from_rusqlite(err),
    }
}
