//! Row mapping helpers shared by the repositories

use chrono::{DateTime, Utc};
use mazuri_core::model::{Cocktail, Customer, Order, OrderStatus};
use mazuri_core::MazuriError;
use rusqlite::types::Type;
use rusqlite::Row;

pub(crate) const COCKTAIL_COLUMNS: &str = "id, name, ingredients, price, category, created_at";
pub(crate) const CUSTOMER_COLUMNS: &str = "id, name, email, phone, favorite_drink, created_at";
pub(crate) const ORDER_COLUMNS: &str =
    "id, customer_id, cocktail_id, quantity, order_date, status, completed_at";

/// Timestamps are stored as Unix milliseconds
pub(crate) fn to_millis(dt: &DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

/// Convert a stored timestamp; `idx` is the column it was read from
pub(crate) fn from_millis(idx: usize, ms: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| {
        let err = MazuriError::invalid("timestamp", format!("{} ms is out of range", ms));
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(err))
    })
}

fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    from_millis(idx, row.get(idx)?)
}

/// Map a cocktail whose columns start at `offset`, in `COCKTAIL_COLUMNS` order
pub(crate) fn cocktail_at(row: &Row<'_>, offset: usize) -> rusqlite::Result<Cocktail> {
    Ok(Cocktail {
        id: row.get(offset)?,
        name: row.get(offset + 1)?,
        ingredients: row.get(offset + 2)?,
        price: row.get(offset + 3)?,
        category: row.get(offset + 4)?,
        created_at: timestamp_at(row, offset + 5)?,
    })
}

pub(crate) fn customer_at(row: &Row<'_>, offset: usize) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(offset)?,
        name: row.get(offset + 1)?,
        email: row.get(offset + 2)?,
        phone: row.get(offset + 3)?,
        favorite_drink: row.get(offset + 4)?,
        created_at: timestamp_at(row, offset + 5)?,
    })
}

pub(crate) fn order_at(row: &Row<'_>, offset: usize) -> rusqlite::Result<Order> {
    let status_idx = offset + 5;
    let status_text: String = row.get(status_idx)?;
    let status = status_text
        .parse::<OrderStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(status_idx, Type::Text, Box::new(e)))?;
    let completed_idx = offset + 6;
    let completed_at = match row.get::<_, Option<i64>>(completed_idx)? {
        Some(ms) => Some(from_millis(completed_idx, ms)?),
        None => None,
    };

    Ok(Order {
        id: row.get(offset)?,
        customer_id: row.get(offset + 1)?,
        cocktail_id: row.get(offset + 2)?,
        quantity: row.get(offset + 3)?,
        order_date: timestamp_at(row, offset + 4)?,
        status,
        completed_at,
    })
}

/// Map a LEFT JOINed record: absent when its id column is NULL
pub(crate) fn optional_at<T>(
    row: &Row<'_>,
    offset: usize,
    map: fn(&Row<'_>, usize) -> rusqlite::Result<T>,
) -> rusqlite::Result<Option<T>> {
    let id: Option<i64> = row.get(offset)?;
    match id {
        Some(_) => map(row, offset).map(Some),
        None => Ok(None),
    }
}
