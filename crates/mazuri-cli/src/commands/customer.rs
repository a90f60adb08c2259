//! Customer commands
//!
//! Usage: maji-mazuri customer <add|list|update|delete> [OPTIONS]

use crate::render::display_table;
use clap::{Args, Subcommand};
use colored::Colorize;
use mazuri_core::model::{CustomerPatch, NewCustomer};
use mazuri_core::validation::optional_text;
use mazuri_engine::commands::customer;
use rusqlite::Connection;

const HEADERS: [&str; 4] = ["ID", "Name", "Email", "Favorite Drink"];
const COLUMNS: [&str; 4] = ["id", "name", "email", "favorite_drink"];

#[derive(Debug, Args)]
pub struct CustomerArgs {
    #[command(subcommand)]
    pub command: CustomerCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Add a new customer
    Add(AddArgs),
    /// List all customers
    List,
    /// Update a customer by ID
    Update(UpdateArgs),
    /// Delete a customer by ID
    Delete(IdArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Name of the customer
    #[arg(long)]
    pub name: String,

    /// Email of the customer (blank for none)
    #[arg(long)]
    pub email: String,

    /// Phone number of the customer (blank for none)
    #[arg(long)]
    pub phone: String,

    /// Customer's favorite drink (blank for none)
    #[arg(long)]
    pub favorite: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the customer to update
    #[arg(long)]
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New email (blank clears it)
    #[arg(long)]
    pub email: Option<String>,

    /// New phone number (blank clears it)
    #[arg(long)]
    pub phone: Option<String>,

    /// New favorite drink (blank clears it)
    #[arg(long)]
    pub favorite: Option<String>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// ID of the customer
    #[arg(long)]
    pub id: i64,
}

/// Execute customer command
pub fn execute(args: CustomerArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        CustomerCommand::Add(add_args) => execute_add(add_args, conn),
        CustomerCommand::List => execute_list(conn),
        CustomerCommand::Update(update_args) => execute_update(update_args, conn),
        CustomerCommand::Delete(id_args) => execute_delete(id_args, conn),
    }
}

fn execute_add(args: AddArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    let new = NewCustomer {
        name: args.name,
        email: optional_text(args.email),
        phone: optional_text(args.phone),
        favorite_drink: optional_text(args.favorite),
    };
    let added = customer::customer_add(conn, new)?;

    println!("{}", format!("Added customer: {}", added.name).green());
    Ok(())
}

fn execute_list(conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let customers = customer::customer_list(conn)?;
    if customers.is_empty() {
        println!("No customers found");
        return Ok(());
    }

    println!("{}", display_table(&customers, &HEADERS, &COLUMNS)?);
    Ok(())
}

fn execute_update(args: UpdateArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    let patch = CustomerPatch {
        name: args.name,
        email: args.email.map(optional_text),
        phone: args.phone.map(optional_text),
        favorite_drink: args.favorite.map(optional_text),
    };
    let updated = customer::customer_update(conn, args.id, patch)?;

    println!("{}", format!("Updated customer (ID: {})", updated.id).green());
    Ok(())
}

fn execute_delete(args: IdArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    let deleted = customer::customer_delete(conn, args.id)?;

    println!("{}", format!("Deleted customer (ID: {})", deleted.id).green());
    Ok(())
}
