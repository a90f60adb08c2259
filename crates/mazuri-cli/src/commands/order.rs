//! Order commands
//!
//! Usage: maji-mazuri order <add|list|update|delete|complete> [OPTIONS]

use crate::render::{display_table, NOT_AVAILABLE};
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use mazuri_core::model::{NewOrder, OrderPatch, OrderStatus};
use mazuri_engine::commands::order;
use rusqlite::Connection;

const HEADERS: [&str; 6] = ["ID", "Customer", "Cocktail", "Quantity", "Status", "Ordered"];
const COLUMNS: [&str; 6] = [
    "id",
    "customer.name",
    "cocktail.name",
    "quantity",
    "status",
    "order_date",
];

#[derive(Debug, Args)]
pub struct OrderArgs {
    #[command(subcommand)]
    pub command: OrderCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// Place a new order
    Add(AddArgs),
    /// List all orders
    List,
    /// Update an order by ID
    Update(UpdateArgs),
    /// Delete an order by ID
    Delete(IdArgs),
    /// Mark an order as completed
    Complete(IdArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// ID of the customer
    #[arg(long)]
    pub customer_id: i64,

    /// ID of the cocktail
    #[arg(long)]
    pub cocktail_id: i64,

    /// Quantity to order
    #[arg(long, default_value_t = 1)]
    pub quantity: i64,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the order to update
    #[arg(long)]
    pub id: i64,

    /// New customer ID
    #[arg(long)]
    pub customer_id: Option<i64>,

    /// New cocktail ID
    #[arg(long)]
    pub cocktail_id: Option<i64>,

    /// New quantity
    #[arg(long)]
    pub quantity: Option<i64>,

    /// New status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// ID of the order
    #[arg(long)]
    pub id: i64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Pending,
    Completed,
    Cancelled,
}

impl From<StatusArg> for OrderStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Pending => OrderStatus::Pending,
            StatusArg::Completed => OrderStatus::Completed,
            StatusArg::Cancelled => OrderStatus::Cancelled,
        }
    }
}

/// Execute order command
pub fn execute(args: OrderArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        OrderCommand::Add(add_args) => execute_add(add_args, conn),
        OrderCommand::List => execute_list(conn),
        OrderCommand::Update(update_args) => execute_update(update_args, conn),
        OrderCommand::Delete(id_args) => execute_delete(id_args, conn),
        OrderCommand::Complete(id_args) => execute_complete(id_args, conn),
    }
}

fn execute_add(args: AddArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    let new = NewOrder::new(args.customer_id, args.cocktail_id).with_quantity(args.quantity);
    let placed = order::order_add(conn, new)?;

    let customer = placed
        .customer
        .as_ref()
        .map_or(NOT_AVAILABLE, |c| c.name.as_str());
    let cocktail = placed
        .cocktail
        .as_ref()
        .map_or(NOT_AVAILABLE, |c| c.name.as_str());
    println!(
        "{}",
        format!(
            "Added order: {} ordered {}x {}",
            customer, placed.order.quantity, cocktail
        )
        .green()
    );
    Ok(())
}

fn execute_list(conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let orders = order::order_list(conn)?;
    if orders.is_empty() {
        println!("No orders found");
        return Ok(());
    }

    println!("{}", display_table(&orders, &HEADERS, &COLUMNS)?);
    Ok(())
}

fn execute_update(args: UpdateArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    let patch = OrderPatch {
        customer_id: args.customer_id,
        cocktail_id: args.cocktail_id,
        quantity: args.quantity,
        status: args.status.map(OrderStatus::from),
    };
    let updated = order::order_update(conn, args.id, patch)?;

    println!("{}", format!("Updated order (ID: {})", updated.id).green());
    Ok(())
}

fn execute_delete(args: IdArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    let deleted = order::order_delete(conn, args.id)?;

    println!("{}", format!("Deleted order (ID: {})", deleted.id).green());
    Ok(())
}

fn execute_complete(args: IdArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    let completed = order::order_complete(conn, args.id)?;

    println!("{}", format!("Completed order (ID: {})", completed.id).green());
    Ok(())
}
