//! Maji Mazuri Core - record types and shared facilities
//!
//! This crate provides the foundations the store and CLI build on:
//! - Cocktail, Customer and Order records with their patch and filter shapes
//! - The closed `OrderStatus` enumeration
//! - Field validation applied at the command boundary
//! - The error facility (`MazuriError`, `ExError`) and structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod validation;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, MazuriError, Result};
pub use model::{
    Cocktail, CocktailFilter, CocktailPatch, Customer, CustomerPatch, DbStats, NewCocktail,
    NewCustomer, NewOrder, Order, OrderDetail, OrderPatch, OrderStatus, StatusReport,
    TopCustomer,
};
