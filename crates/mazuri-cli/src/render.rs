//! Table rendering for listing commands
//!
//! Columns are addressed by field path. A path is resolved one segment at a
//! time, so `customer.name` on an order row follows the customer
//! relationship and then reads its name.

use chrono::{DateTime, Utc};
use mazuri_core::model::{Cocktail, Customer, Order, OrderDetail, TopCustomer};
use tabled::builder::Builder;
use tabled::settings::Style;
use thiserror::Error;

/// Placeholder for an absent relationship or timestamp
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Unknown field '{segment}' in column path '{path}'")]
    UnknownField { path: String, segment: String },

    #[error("Column path '{path}' ends at a relationship, not a value")]
    NotAValue { path: String },

    #[error("{headers} header(s) given for {columns} column(s)")]
    ColumnMismatch { headers: usize, columns: usize },
}

/// One resolved field of a record
pub enum Cell<'a> {
    Text(String),
    Related(Option<&'a dyn Record>),
}

/// A row type that can be displayed by field path
pub trait Record {
    /// Look up a direct field; `None` when the record has no such field
    fn field(&self, name: &str) -> Option<Cell<'_>>;
}

/// Resolve a dotted field path against `record`
pub fn resolve(record: &dyn Record, path: &str) -> Result<String, RenderError> {
    let mut current = record;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        let unknown = || RenderError::UnknownField {
            path: path.to_string(),
            segment: segment.to_string(),
        };
        let is_last = segments.peek().is_none();

        match current.field(segment).ok_or_else(unknown)? {
            Cell::Text(text) if is_last => return Ok(text),
            Cell::Text(_) => {
                // Plain values have no sub-fields.
                let next = segments.next().unwrap_or_default();
                return Err(RenderError::UnknownField {
                    path: path.to_string(),
                    segment: next.to_string(),
                });
            }
            Cell::Related(_) if is_last => {
                return Err(RenderError::NotAValue {
                    path: path.to_string(),
                })
            }
            Cell::Related(None) => return Ok(NOT_AVAILABLE.to_string()),
            Cell::Related(Some(next)) => current = next,
        }
    }

    Err(RenderError::UnknownField {
        path: path.to_string(),
        segment: String::new(),
    })
}

/// Render `items` as a boxed text table
///
/// ## Errors
///
/// - `ColumnMismatch` when `headers` and `columns` differ in length
/// - `UnknownField` / `NotAValue` when a column path does not resolve to a value
pub fn display_table<R: Record>(
    items: &[R],
    headers: &[&str],
    columns: &[&str],
) -> Result<String, RenderError> {
    if headers.len() != columns.len() {
        return Err(RenderError::ColumnMismatch {
            headers: headers.len(),
            columns: columns.len(),
        });
    }

    let mut builder = Builder::default();
    builder.push_record(headers.iter().copied());
    for item in items {
        let row = columns
            .iter()
            .map(|path| resolve(item, path))
            .collect::<Result<Vec<_>, _>>()?;
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    Ok(table.to_string())
}

pub fn format_datetime(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

fn text(value: impl ToString) -> Option<Cell<'static>> {
    Some(Cell::Text(value.to_string()))
}

fn optional_text(value: &Option<String>) -> Option<Cell<'static>> {
    text(value.as_deref().unwrap_or_default())
}

impl Record for Cocktail {
    fn field(&self, name: &str) -> Option<Cell<'_>> {
        match name {
            "id" => text(self.id),
            "name" => text(&self.name),
            "ingredients" => text(&self.ingredients),
            "price" => text(format_price(self.price)),
            "category" => optional_text(&self.category),
            "created_at" => text(format_datetime(Some(self.created_at))),
            _ => None,
        }
    }
}

impl Record for Customer {
    fn field(&self, name: &str) -> Option<Cell<'_>> {
        match name {
            "id" => text(self.id),
            "name" => text(&self.name),
            "email" => optional_text(&self.email),
            "phone" => optional_text(&self.phone),
            "favorite_drink" => optional_text(&self.favorite_drink),
            "created_at" => text(format_datetime(Some(self.created_at))),
            _ => None,
        }
    }
}

impl Record for Order {
    fn field(&self, name: &str) -> Option<Cell<'_>> {
        match name {
            "id" => text(self.id),
            "customer_id" => text(self.customer_id),
            "cocktail_id" => text(self.cocktail_id),
            "quantity" => text(self.quantity),
            "status" => text(self.status),
            "order_date" => text(format_datetime(Some(self.order_date))),
            "completed_at" => text(format_datetime(self.completed_at)),
            _ => None,
        }
    }
}

impl Record for OrderDetail {
    fn field(&self, name: &str) -> Option<Cell<'_>> {
        match name {
            "customer" => Some(Cell::Related(
                self.customer.as_ref().map(|c| c as &dyn Record),
            )),
            "cocktail" => Some(Cell::Related(
                self.cocktail.as_ref().map(|c| c as &dyn Record),
            )),
            "total" => text(
                self.line_total()
                    .map(format_price)
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            _ => self.order.field(name),
        }
    }
}

impl Record for TopCustomer {
    fn field(&self, name: &str) -> Option<Cell<'_>> {
        match name {
            "customer_id" => text(self.customer_id),
            "name" => text(&self.name),
            "order_count" => text(self.order_count),
            _ => None,
        }
    }
}
