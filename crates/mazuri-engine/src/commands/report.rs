//! Read-only report handlers

use super::log_outcome;
use mazuri_core::log_op_start;
use mazuri_core::model::{DbStats, StatusReport, TopCustomer};
use mazuri_store::errors::Result;
use mazuri_store::reports;
use rusqlite::Connection;
use std::time::Instant;

/// Size of the top-customers ranking
pub const TOP_CUSTOMER_LIMIT: u32 = 5;

/// The five customers with the most orders
pub fn top_customers(conn: &Connection) -> Result<Vec<TopCustomer>> {
    log_op_start!("top_customers");
    let start = Instant::now();
    let result = reports::top_customers(conn, TOP_CUSTOMER_LIMIT);
    log_outcome("top_customers", start, &result);
    result
}

/// Revenue from completed orders; `None` when nothing has been completed
pub fn total_revenue(conn: &Connection) -> Result<Option<f64>> {
    log_op_start!("total_revenue");
    let start = Instant::now();
    let result = reports::total_revenue(conn);
    log_outcome("total_revenue", start, &result);
    result
}

pub fn status(conn: &Connection) -> Result<StatusReport> {
    log_op_start!("status");
    let start = Instant::now();
    let result = reports::status_report(conn);
    log_outcome("status", start, &result);
    result
}

pub fn stats(conn: &Connection) -> Result<DbStats> {
    log_op_start!("stats");
    let start = Instant::now();
    let result = reports::db_stats(conn);
    log_outcome("stats", start, &result);
    result
}
