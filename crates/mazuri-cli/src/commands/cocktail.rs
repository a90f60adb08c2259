//! Cocktail commands
//!
//! Usage: maji-mazuri cocktail <add|list|update|delete|search> [OPTIONS]

use crate::render::display_table;
use clap::{Args, Subcommand};
use colored::Colorize;
use mazuri_core::model::{CocktailFilter, CocktailPatch, NewCocktail};
use mazuri_core::validation::optional_text;
use mazuri_engine::commands::cocktail;
use rusqlite::Connection;

const HEADERS: [&str; 4] = ["ID", "Name", "Price", "Category"];
const COLUMNS: [&str; 4] = ["id", "name", "price", "category"];

#[derive(Debug, Args)]
pub struct CocktailArgs {
    #[command(subcommand)]
    pub command: CocktailCommand,
}

#[derive(Debug, Subcommand)]
pub enum CocktailCommand {
    /// Add a new cocktail
    Add(AddArgs),
    /// List all cocktails
    List,
    /// Update a cocktail by ID
    Update(UpdateArgs),
    /// Delete a cocktail by ID
    Delete(IdArgs),
    /// Search cocktails by name, category or maximum price
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Name of the cocktail
    #[arg(long)]
    pub name: String,

    /// List of ingredients
    #[arg(long)]
    pub ingredients: String,

    /// Price of the cocktail
    #[arg(long)]
    pub price: f64,

    /// Category of the cocktail (blank for none)
    #[arg(long)]
    pub category: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the cocktail to update
    #[arg(long)]
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New list of ingredients
    #[arg(long)]
    pub ingredients: Option<String>,

    /// New price
    #[arg(long)]
    pub price: Option<f64>,

    /// New category (blank clears it)
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// ID of the cocktail
    #[arg(long)]
    pub id: i64,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Part of the name, case-insensitive
    #[arg(long)]
    pub name: Option<String>,

    /// Part of the category, case-insensitive
    #[arg(long)]
    pub category: Option<String>,

    /// Highest price to include
    #[arg(long)]
    pub max_price: Option<f64>,
}

/// Execute cocktail command
pub fn execute(args: CocktailArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        CocktailCommand::Add(add_args) => execute_add(add_args, conn),
        CocktailCommand::List => execute_list(conn, &CocktailFilter::default()),
        CocktailCommand::Update(update_args) => execute_update(update_args, conn),
        CocktailCommand::Delete(id_args) => execute_delete(id_args, conn),
        CocktailCommand::Search(search_args) => {
            let filter = CocktailFilter {
                name: search_args.name.and_then(optional_text),
                category: search_args.category.and_then(optional_text),
                max_price: search_args.max_price,
            };
            execute_list(conn, &filter)
        }
    }
}

fn execute_add(args: AddArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    let new = NewCocktail::new(
        args.name,
        args.ingredients,
        args.price,
        optional_text(args.category),
    );
    let cocktail = cocktail::cocktail_add(conn, new)?;

    println!("{}", format!("Added cocktail: {}", cocktail.name).green());
    Ok(())
}

fn execute_list(conn: &Connection, filter: &CocktailFilter) -> Result<(), Box<dyn std::error::Error>> {
    let cocktails = cocktail::cocktail_list(conn, filter)?;
    if cocktails.is_empty() {
        println!("No cocktails found");
        return Ok(());
    }

    println!("{}", display_table(&cocktails, &HEADERS, &COLUMNS)?);
    Ok(())
}

fn execute_update(args: UpdateArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    let patch = CocktailPatch {
        name: args.name,
        ingredients: args.ingredients,
        price: args.price,
        category: args.category.map(optional_text),
    };
    let updated = cocktail::cocktail_update(conn, args.id, patch)?;

    println!("{}", format!("Updated cocktail (ID: {})", updated.id).green());
    Ok(())
}

fn execute_delete(args: IdArgs, conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    let deleted = cocktail::cocktail_delete(conn, args.id)?;

    println!("{}", format!("Deleted cocktail (ID: {})", deleted.id).green());
    Ok(())
}
