//! Customer command handlers

use super::log_outcome;
use chrono::Utc;
use mazuri_core::log_op_start;
use mazuri_core::model::{Customer, CustomerPatch, NewCustomer};
use mazuri_core::MazuriError;
use mazuri_store::errors::{from_rusqlite, Result};
use mazuri_store::{CustomerRepo, OrderRepo};
use rusqlite::Connection;
use std::time::Instant;

/// Register a customer
///
/// ## Errors
///
/// - `InvalidInput`: blank name or malformed email
/// - `DuplicateCustomerEmail`: another customer has this email
pub fn customer_add(conn: &mut Connection, new: NewCustomer) -> Result<Customer> {
    log_op_start!("customer_add");
    let start = Instant::now();
    let result = customer_add_impl(conn, new);
    log_outcome("customer_add", start, &result);
    result
}

fn customer_add_impl(conn: &mut Connection, new: NewCustomer) -> Result<Customer> {
    new.validate()?;

    let tx = conn.transaction().map_err(from_rusqlite)?;
    let id = CustomerRepo::insert(&tx, &new, Utc::now())?;
    let customer = CustomerRepo::get(&tx, id)?.ok_or(MazuriError::CustomerNotFound { id })?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(customer)
}

pub fn customer_list(conn: &Connection) -> Result<Vec<Customer>> {
    log_op_start!("customer_list");
    let start = Instant::now();
    let result = CustomerRepo::list(conn);
    log_outcome("customer_list", start, &result);
    result
}

/// Apply a partial update; fields absent from the patch are left alone
///
/// ## Errors
///
/// - `CustomerNotFound`: no customer has this id (nothing is written)
/// - `InvalidInput` / `DuplicateCustomerEmail` / `Persistence`
pub fn customer_update(conn: &mut Connection, id: i64, patch: CustomerPatch) -> Result<Customer> {
    log_op_start!("customer_update", customer_id = id);
    let start = Instant::now();
    let result = customer_update_impl(conn, id, patch);
    log_outcome("customer_update", start, &result);
    result
}

fn customer_update_impl(conn: &mut Connection, id: i64, patch: CustomerPatch) -> Result<Customer> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let mut customer = CustomerRepo::get(&tx, id)?.ok_or(MazuriError::CustomerNotFound { id })?;

    if patch.is_empty() {
        tracing::debug!(customer_id = id, "empty patch, nothing to write");
        return Ok(customer);
    }

    patch.validate()?;
    patch.apply(&mut customer);
    CustomerRepo::update(&tx, &customer)?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(customer)
}

/// Remove a customer who has no orders
///
/// ## Errors
///
/// - `CustomerNotFound`: no customer has this id
/// - `StillReferenced`: the customer has orders (nothing is removed)
pub fn customer_delete(conn: &mut Connection, id: i64) -> Result<Customer> {
    log_op_start!("customer_delete", customer_id = id);
    let start = Instant::now();
    let result = customer_delete_impl(conn, id);
    log_outcome("customer_delete", start, &result);
    result
}

fn customer_delete_impl(conn: &mut Connection, id: i64) -> Result<Customer> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let customer = CustomerRepo::get(&tx, id)?.ok_or(MazuriError::CustomerNotFound { id })?;

    let orders = OrderRepo::count_for_customer(&tx, id)?;
    if orders > 0 {
        return Err(MazuriError::StillReferenced {
            entity: "customer".to_string(),
            id,
            orders,
        });
    }

    CustomerRepo::delete(&tx, id)?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(customer)
}
