use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{MazuriError, Result};
use crate::model::{Cocktail, Customer};
use crate::validation;

/// Lifecycle state of an order
///
/// Stored as lowercase text. `complete` is the only system-driven
/// transition; updates may set any of the three values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = MazuriError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(MazuriError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Order - a customer ordering some quantity of one cocktail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub cocktail_id: i64,

    /// Always at least 1
    pub quantity: i64,

    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,

    /// Set while the order is completed, cleared otherwise
    pub completed_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Mark the order completed, stamping the completion time with `now`
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.status = OrderStatus::Completed;
        self.completed_at = Some(now);
    }

    /// Set the status from an update
    ///
    /// Moving into `Completed` keeps an existing stamp or sets one; any other
    /// status clears `completed_at`.
    pub fn set_status(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        self.status = status;
        match status {
            OrderStatus::Completed => {
                self.completed_at.get_or_insert(now);
            }
            OrderStatus::Pending | OrderStatus::Cancelled => self.completed_at = None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

/// Fields for placing a new order
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: i64,
    pub cocktail_id: i64,
    pub quantity: i64,
}

impl NewOrder {
    /// A single-drink order
    pub fn new(customer_id: i64, cocktail_id: i64) -> Self {
        Self {
            customer_id,
            cocktail_id,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validation::validate_quantity(self.quantity)
    }
}

/// Partial update for an order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub customer_id: Option<i64>,
    pub cocktail_id: Option<i64>,
    pub quantity: Option<i64>,
    pub status: Option<OrderStatus>,
}

impl OrderPatch {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_none()
            && self.cocktail_id.is_none()
            && self.quantity.is_none()
            && self.status.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(quantity) = self.quantity {
            validation::validate_quantity(quantity)?;
        }
        Ok(())
    }

    pub fn apply(&self, order: &mut Order, now: DateTime<Utc>) {
        if let Some(customer_id) = self.customer_id {
            order.customer_id = customer_id;
        }
        if let Some(cocktail_id) = self.cocktail_id {
            order.cocktail_id = cocktail_id;
        }
        if let Some(quantity) = self.quantity {
            order.quantity = quantity;
        }
        if let Some(status) = self.status {
            order.set_status(status, now);
        }
    }
}

/// An order together with the records it references
///
/// The references are optional so rows survive a missing parent; listing
/// shows `N/A` for them.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub order: Order,
    pub customer: Option<Customer>,
    pub cocktail: Option<Cocktail>,
}

impl OrderDetail {
    /// Price × quantity, when the cocktail is known
    pub fn line_total(&self) -> Option<f64> {
        self.cocktail
            .as_ref()
            .map(|c| c.price * self.order.quantity as f64)
    }
}
