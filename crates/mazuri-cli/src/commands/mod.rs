pub mod cocktail;
pub mod customer;
pub mod order;
pub mod report;
