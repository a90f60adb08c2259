//! Order command handlers
//!
//! Orders reference a customer and a cocktail. Both are checked to exist
//! immediately before any insert or re-pointing update.

use super::log_outcome;
use chrono::Utc;
use mazuri_core::log_op_start;
use mazuri_core::model::{NewOrder, Order, OrderDetail, OrderPatch};
use mazuri_core::MazuriError;
use mazuri_store::errors::{from_rusqlite, Result};
use mazuri_store::{CocktailRepo, CustomerRepo, OrderRepo};
use rusqlite::Connection;
use std::time::Instant;

/// Place a new pending order
///
/// Returns the order with its customer and cocktail for confirmation output.
///
/// ## Errors
///
/// - `InvalidInput`: quantity below 1
/// - `CustomerNotFound` / `CocktailNotFound`: a referenced id does not resolve
pub fn order_add(conn: &mut Connection, new: NewOrder) -> Result<OrderDetail> {
    log_op_start!(
        "order_add",
        customer_id = new.customer_id,
        cocktail_id = new.cocktail_id
    );
    let start = Instant::now();
    let result = order_add_impl(conn, new);
    log_outcome("order_add", start, &result);
    result
}

fn order_add_impl(conn: &mut Connection, new: NewOrder) -> Result<OrderDetail> {
    new.validate()?;

    let tx = conn.transaction().map_err(from_rusqlite)?;
    let customer = CustomerRepo::get(&tx, new.customer_id)?.ok_or(
        MazuriError::CustomerNotFound {
            id: new.customer_id,
        },
    )?;
    let cocktail = CocktailRepo::get(&tx, new.cocktail_id)?.ok_or(
        MazuriError::CocktailNotFound {
            id: new.cocktail_id,
        },
    )?;

    let id = OrderRepo::insert(&tx, &new, Utc::now())?;
    let order = OrderRepo::get(&tx, id)?.ok_or(MazuriError::OrderNotFound { id })?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(OrderDetail {
        order,
        customer: Some(customer),
        cocktail: Some(cocktail),
    })
}

/// All orders with the names they reference
pub fn order_list(conn: &Connection) -> Result<Vec<OrderDetail>> {
    log_op_start!("order_list");
    let start = Instant::now();
    let result = OrderRepo::list_details(conn);
    log_outcome("order_list", start, &result);
    result
}

/// Apply a partial update; fields absent from the patch are left alone
///
/// Setting the status to completed stamps `completed_at` if it is not set
/// yet; any other status clears it.
///
/// ## Errors
///
/// - `OrderNotFound`: no order has this id (nothing is written)
/// - `CustomerNotFound` / `CocktailNotFound`: the patch points at a missing record
/// - `InvalidInput`: quantity below 1
pub fn order_update(conn: &mut Connection, id: i64, patch: OrderPatch) -> Result<Order> {
    log_op_start!("order_update", order_id = id);
    let start = Instant::now();
    let result = order_update_impl(conn, id, patch);
    log_outcome("order_update", start, &result);
    result
}

fn order_update_impl(conn: &mut Connection, id: i64, patch: OrderPatch) -> Result<Order> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let mut order = OrderRepo::get(&tx, id)?.ok_or(MazuriError::OrderNotFound { id })?;

    if patch.is_empty() {
        tracing::debug!(order_id = id, "empty patch, nothing to write");
        return Ok(order);
    }

    patch.validate()?;
    if let Some(customer_id) = patch.customer_id {
        if CustomerRepo::get(&tx, customer_id)?.is_none() {
            return Err(MazuriError::CustomerNotFound { id: customer_id });
        }
    }
    if let Some(cocktail_id) = patch.cocktail_id {
        if CocktailRepo::get(&tx, cocktail_id)?.is_none() {
            return Err(MazuriError::CocktailNotFound { id: cocktail_id });
        }
    }

    patch.apply(&mut order, Utc::now());
    OrderRepo::update(&tx, &order)?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(order)
}

/// Remove an order
pub fn order_delete(conn: &mut Connection, id: i64) -> Result<Order> {
    log_op_start!("order_delete", order_id = id);
    let start = Instant::now();
    let result = order_delete_impl(conn, id);
    log_outcome("order_delete", start, &result);
    result
}

fn order_delete_impl(conn: &mut Connection, id: i64) -> Result<Order> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let order = OrderRepo::get(&tx, id)?.ok_or(MazuriError::OrderNotFound { id })?;
    OrderRepo::delete(&tx, id)?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(order)
}

/// Mark an order completed and stamp the completion time
///
/// ## Errors
///
/// - `OrderNotFound`: no order has this id
pub fn order_complete(conn: &mut Connection, id: i64) -> Result<Order> {
    log_op_start!("order_complete", order_id = id);
    let start = Instant::now();
    let result = order_complete_impl(conn, id);
    log_outcome("order_complete", start, &result);
    result
}

fn order_complete_impl(conn: &mut Connection, id: i64) -> Result<Order> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let mut order = OrderRepo::get(&tx, id)?.ok_or(MazuriError::OrderNotFound { id })?;
    order.complete(Utc::now());
    OrderRepo::update(&tx, &order)?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(order)
}
