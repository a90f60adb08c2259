use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::validation;

/// Cocktail - a drink on the menu
///
/// Names are unique across all cocktails; the store enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    /// Generated primary key
    pub id: i64,

    /// Unique display name
    pub name: String,

    /// Free-text ingredient list
    pub ingredients: String,

    /// Menu price, never negative
    pub price: f64,

    pub category: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a new cocktail
#[derive(Debug, Clone, PartialEq)]
pub struct NewCocktail {
    pub name: String,
    pub ingredients: String,
    pub price: f64,
    pub category: Option<String>,
}

impl NewCocktail {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        price: f64,
        category: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            price,
            category,
        }
    }

    /// Check required fields and the price bound
    pub fn validate(&self) -> Result<()> {
        validation::require_text("name", &self.name)?;
        validation::require_text("ingredients", &self.ingredients)?;
        validation::validate_price(self.price)
    }
}

/// Partial update for a cocktail
///
/// Only `Some` fields are written. `category: Some(None)` clears the category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CocktailPatch {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Option<String>>,
}

impl CocktailPatch {
    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ingredients.is_none()
            && self.price.is_none()
            && self.category.is_none()
    }

    /// Validate only the fields being set
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validation::require_text("name", name)?;
        }
        if let Some(ingredients) = &self.ingredients {
            validation::require_text("ingredients", ingredients)?;
        }
        if let Some(price) = self.price {
            validation::validate_price(price)?;
        }
        Ok(())
    }

    /// Overwrite the supplied fields on `cocktail`
    pub fn apply(&self, cocktail: &mut Cocktail) {
        if let Some(name) = &self.name {
            cocktail.name = name.clone();
        }
        if let Some(ingredients) = &self.ingredients {
            cocktail.ingredients = ingredients.clone();
        }
        if let Some(price) = self.price {
            cocktail.price = price;
        }
        if let Some(category) = &self.category {
            cocktail.category = category.clone();
        }
    }
}

/// Search filters for cocktails; all present filters must match
///
/// Name and category match as case-insensitive substrings; `max_price` is an
/// inclusive ceiling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CocktailFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub max_price: Option<f64>,
}

impl CocktailFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.max_price.is_none()
    }

    /// The price ceiling must itself be a valid price
    pub fn validate(&self) -> Result<()> {
        match self.max_price {
            Some(max_price) => validation::validate_price(max_price),
            None => Ok(()),
        }
    }
}
