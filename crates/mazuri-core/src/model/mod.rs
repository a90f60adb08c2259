pub mod cocktail;
pub mod customer;
pub mod order;
pub mod report;

pub use cocktail::{Cocktail, CocktailFilter, CocktailPatch, NewCocktail};
pub use customer::{Customer, CustomerPatch, NewCustomer};
pub use order::{NewOrder, Order, OrderDetail, OrderPatch, OrderStatus};
pub use report::{DbStats, StatusReport, TopCustomer};
