//! Maji Mazuri Store - SQLite persistence for the bar inventory
//!
//! Provides:
//! - Connection/session management (`db`)
//! - Embedded, checksummed schema migrations
//! - Repositories for cocktails, customers and orders
//! - Aggregate report queries

pub mod db;
pub mod errors;
pub mod migrations;
pub mod reports;
pub mod repo;

// Re-export key types
pub use db::{initialize, open_session};
pub use errors::Result;
pub use repo::{CocktailRepo, CustomerRepo, OrderRepo};
