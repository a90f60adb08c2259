use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::validation;

/// Customer - a bar patron who places orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,

    /// Unique when present
    pub email: Option<String>,

    pub phone: Option<String>,

    /// Free text; not checked against the cocktail menu
    pub favorite_drink: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a new customer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub favorite_drink: Option<String>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_favorite_drink(mut self, drink: impl Into<String>) -> Self {
        self.favorite_drink = Some(drink.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        validation::require_text("name", &self.name)?;
        validation::validate_email(self.email.as_deref())
    }
}

/// Partial update for a customer
///
/// Only `Some` fields are written; `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub favorite_drink: Option<Option<String>>,
}

impl CustomerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.favorite_drink.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validation::require_text("name", name)?;
        }
        if let Some(email) = &self.email {
            validation::validate_email(email.as_deref())?;
        }
        Ok(())
    }

    pub fn apply(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(email) = &self.email {
            customer.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            customer.phone = phone.clone();
        }
        if let Some(drink) = &self.favorite_drink {
            customer.favorite_drink = drink.clone();
        }
    }
}
