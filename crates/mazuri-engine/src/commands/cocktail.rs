//! Cocktail command handlers

use super::log_outcome;
use chrono::Utc;
use mazuri_core::log_op_start;
use mazuri_core::model::{Cocktail, CocktailFilter, CocktailPatch, NewCocktail};
use mazuri_core::MazuriError;
use mazuri_store::errors::{from_rusqlite, Result};
use mazuri_store::{CocktailRepo, OrderRepo};
use rusqlite::Connection;
use std::time::Instant;

/// Add a cocktail to the menu
///
/// ## Errors
///
/// - `InvalidInput`: blank name/ingredients or negative price
/// - `DuplicateCocktailName`: the name is already on the menu
/// - `Persistence`: database error
pub fn cocktail_add(conn: &mut Connection, new: NewCocktail) -> Result<Cocktail> {
    log_op_start!("cocktail_add", cocktail_name = new.name.as_str());
    let start = Instant::now();
    let result = cocktail_add_impl(conn, new);
    log_outcome("cocktail_add", start, &result);
    result
}

fn cocktail_add_impl(conn: &mut Connection, new: NewCocktail) -> Result<Cocktail> {
    new.validate()?;

    let tx = conn.transaction().map_err(from_rusqlite)?;
    let id = CocktailRepo::insert(&tx, &new, Utc::now())?;
    let cocktail = CocktailRepo::get(&tx, id)?.ok_or(MazuriError::CocktailNotFound { id })?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(cocktail)
}

/// List cocktails; an empty filter lists the whole menu
///
/// ## Errors
///
/// - `InvalidInput`: `max_price` is negative or not a finite number
pub fn cocktail_list(conn: &Connection, filter: &CocktailFilter) -> Result<Vec<Cocktail>> {
    let filtered = !filter.is_empty();
    log_op_start!("cocktail_list", filtered = filtered);
    let start = Instant::now();
    let result = filter
        .validate()
        .and_then(|()| CocktailRepo::list(conn, filter));
    log_outcome("cocktail_list", start, &result);
    result
}

/// Apply a partial update; fields absent from the patch are left alone
///
/// ## Errors
///
/// - `CocktailNotFound`: no cocktail has this id (nothing is written)
/// - `InvalidInput` / `DuplicateCocktailName` / `Persistence`
pub fn cocktail_update(conn: &mut Connection, id: i64, patch: CocktailPatch) -> Result<Cocktail> {
    log_op_start!("cocktail_update", cocktail_id = id);
    let start = Instant::now();
    let result = cocktail_update_impl(conn, id, patch);
    log_outcome("cocktail_update", start, &result);
    result
}

fn cocktail_update_impl(conn: &mut Connection, id: i64, patch: CocktailPatch) -> Result<Cocktail> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let mut cocktail = CocktailRepo::get(&tx, id)?.ok_or(MazuriError::CocktailNotFound { id })?;

    if patch.is_empty() {
        tracing::debug!(cocktail_id = id, "empty patch, nothing to write");
        return Ok(cocktail);
    }

    patch.validate()?;
    patch.apply(&mut cocktail);
    CocktailRepo::update(&tx, &cocktail)?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(cocktail)
}

/// Remove a cocktail that no order references
///
/// ## Errors
///
/// - `CocktailNotFound`: no cocktail has this id
/// - `StillReferenced`: orders exist for this cocktail (nothing is removed)
pub fn cocktail_delete(conn: &mut Connection, id: i64) -> Result<Cocktail> {
    log_op_start!("cocktail_delete", cocktail_id = id);
    let start = Instant::now();
    let result = cocktail_delete_impl(conn, id);
    log_outcome("cocktail_delete", start, &result);
    result
}

fn cocktail_delete_impl(conn: &mut Connection, id: i64) -> Result<Cocktail> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let cocktail = CocktailRepo::get(&tx, id)?.ok_or(MazuriError::CocktailNotFound { id })?;

    let orders = OrderRepo::count_for_cocktail(&tx, id)?;
    if orders > 0 {
        return Err(MazuriError::StillReferenced {
            entity: "cocktail".to_string(),
            id,
            orders,
        });
    }

    CocktailRepo::delete(&tx, id)?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(cocktail)
}
