//! Repository layer for persisting bar records to SQLite
//!
//! Every function takes `&Connection`; pass a `&Transaction` (which derefs to
//! a connection) to group work into one atomic unit.

pub mod cocktail_repo;
pub mod customer_repo;
pub mod order_repo;
mod rows;

pub use cocktail_repo::CocktailRepo;
pub use customer_repo::CustomerRepo;
pub use order_repo::OrderRepo;
