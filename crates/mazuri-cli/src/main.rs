//! Maji Mazuri CLI
//!
//! Command-line interface for managing the bar's cocktails, customers and
//! orders.

use clap::{Parser, Subcommand};
use colored::Colorize;
use mazuri_core::logging_facility;
use mazuri_core::MazuriError;
use std::path::PathBuf;

mod commands;
mod config;
mod render;

use config::{CliConfig, DB_ENV_VAR, DEFAULT_DB_PATH};

#[derive(Debug, Parser)]
#[command(name = "maji-mazuri")]
#[command(
    version,
    about = "Maji-Mazuri Cocktail App - Manage cocktails, customers, and orders",
    long_about = None
)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = DB_ENV_VAR, default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON structured logging on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage cocktails
    Cocktail(commands::cocktail::CocktailArgs),
    /// Manage customers
    Customer(commands::customer::CustomerArgs),
    /// Manage orders
    Order(commands::order::OrderArgs),
    /// Show the five customers with the most orders
    #[command(alias = "top_customers")]
    TopCustomers,
    /// Show revenue from completed orders
    #[command(alias = "total_revenue")]
    TotalRevenue,
    /// Show menu size, customer count and pending orders
    Status,
    /// Show row counts for every table
    Stats,
}

fn main() {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::resolve(cli.db, cli.verbose, cli.log_json);
    logging_facility::init(config.log_profile);
    tracing::debug!(db = %config.db_path.display(), "resolved configuration");

    let mut conn = match open_store(&config) {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Cocktail(args) => commands::cocktail::execute(args, &mut conn),
        Commands::Customer(args) => commands::customer::execute(args, &mut conn),
        Commands::Order(args) => commands::order::execute(args, &mut conn),
        Commands::TopCustomers => commands::report::execute_top_customers(&conn),
        Commands::TotalRevenue => commands::report::execute_total_revenue(&conn),
        Commands::Status => commands::report::execute_status(&conn),
        Commands::Stats => commands::report::execute_stats(&conn),
    };

    if let Err(e) = result {
        // Domain outcomes are reported, not fatal.
        match e.downcast_ref::<MazuriError>() {
            Some(err) if err.is_not_found() => println!("{}", err.to_string().red()),
            Some(err) => println!("{}", format!("Error: {}", err).red()),
            None => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Open the database and bring its schema up to date
fn open_store(config: &CliConfig) -> Result<rusqlite::Connection, Box<dyn std::error::Error>> {
    config.ensure_parent_dir()?;
    let mut conn = mazuri_store::open_session(&config.db_path)?;
    mazuri_store::initialize(&mut conn)?;
    Ok(conn)
}
