//! Aggregate report queries
//!
//! Read-only; each report is a single SQL aggregate.

use crate::errors::{from_rusqlite, Result};
use crate::repo::{CocktailRepo, CustomerRepo, OrderRepo};
use mazuri_core::model::{DbStats, OrderStatus, StatusReport, TopCustomer};
use rusqlite::Connection;

/// Customers ranked by number of orders, most first
///
/// Inner join: customers without orders never appear. Ties are broken by
/// customer id so the ranking is stable.
pub fn top_customers(conn: &Connection, limit: u32) -> Result<Vec<TopCustomer>> {
    let mut stmt = conn
        .prepare(
            "SELECT c.id, c.name, COUNT(o.id) AS order_count
             FROM customers c
             JOIN orders o ON o.customer_id = c.id
             GROUP BY c.id, c.name
             ORDER BY order_count DESC, c.id ASC
             LIMIT ?1",
        )
        .map_err(from_rusqlite)?;

    let ranking = stmt
        .query_map([limit], |row| {
            Ok(TopCustomer {
                customer_id: row.get(0)?,
                name: row.get(1)?,
                order_count: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(ranking)
}

/// Sum of price × quantity over completed orders
///
/// `None` when there are no completed orders at all, which is distinct from
/// completed orders that sum to zero.
pub fn total_revenue(conn: &Connection) -> Result<Option<f64>> {
    conn.query_row(
        "SELECT SUM(k.price * o.quantity)
         FROM orders o
         JOIN cocktails k ON k.id = o.cocktail_id
         WHERE o.status = ?1",
        [OrderStatus::Completed.as_str()],
        |row| row.get(0),
    )
    .map_err(from_rusqlite)
}

pub fn status_report(conn: &Connection) -> Result<StatusReport> {
    Ok(StatusReport {
        cocktails: CocktailRepo::count(conn)?,
        customers: CustomerRepo::count(conn)?,
        pending_orders: OrderRepo::count_with_status(conn, OrderStatus::Pending)?,
    })
}

/// Row counts for every table
pub fn db_stats(conn: &Connection) -> Result<DbStats> {
    Ok(DbStats {
        cocktails: CocktailRepo::count(conn)?,
        customers: CustomerRepo::count(conn)?,
        orders: OrderRepo::count(conn)?,
    })
}
