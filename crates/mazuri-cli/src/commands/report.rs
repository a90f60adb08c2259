//! Report commands: top-customers, total-revenue, status, stats

use crate::render::{display_table, format_price};
use colored::Colorize;
use mazuri_engine::commands::report;
use rusqlite::Connection;

/// Show the five customers with the most orders
pub fn execute_top_customers(conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let ranking = report::top_customers(conn)?;
    if ranking.is_empty() {
        println!("No orders found");
        return Ok(());
    }

    println!("{}", "Top customers:".bold());
    println!(
        "{}",
        display_table(
            &ranking,
            &["Customer ID", "Name", "Orders"],
            &["customer_id", "name", "order_count"],
        )?
    );
    Ok(())
}

/// Show revenue from completed orders
pub fn execute_total_revenue(conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    match report::total_revenue(conn)? {
        Some(revenue) => println!(
            "{}",
            format!("Total revenue: ${}", format_price(revenue)).green()
        ),
        None => println!("No completed orders"),
    }
    Ok(())
}

pub fn execute_status(conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let status = report::status(conn)?;

    println!("{}", "Bar status:".bold());
    println!("Cocktails: {}", status.cocktails.to_string().cyan());
    println!("Customers: {}", status.customers.to_string().cyan());
    println!("Pending orders: {}", status.pending_orders.to_string().yellow());
    Ok(())
}

pub fn execute_stats(conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let stats = report::stats(conn)?;

    println!("{}", "Database statistics:".bold());
    println!("Cocktails: {}", stats.cocktails.to_string().cyan());
    println!("Customers: {}", stats.customers.to_string().cyan());
    println!("Orders: {}", stats.orders.to_string().cyan());
    Ok(())
}
