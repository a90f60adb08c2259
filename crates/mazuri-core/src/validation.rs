//! Field validation applied at the command boundary
//!
//! The store only enforces uniqueness; everything else a record needs
//! (non-blank names, non-negative prices, positive quantities, plausible
//! emails) is checked here before a mutation is attempted.

use crate::errors::{MazuriError, Result};

/// Reject empty or whitespace-only text for a required field
pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MazuriError::invalid(field, "cannot be empty"));
    }
    Ok(())
}

/// Prices must be finite and non-negative; zero is allowed
pub fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(MazuriError::invalid("price", "must be a finite number"));
    }
    if price < 0.0 {
        return Err(MazuriError::invalid("price", "cannot be negative"));
    }
    Ok(())
}

pub fn validate_quantity(quantity: i64) -> Result<()> {
    if quantity < 1 {
        return Err(MazuriError::invalid("quantity", "must be at least 1"));
    }
    Ok(())
}

/// Basic email check: absent is fine, present must contain '@'
pub fn validate_email(email: Option<&str>) -> Result<()> {
    match email {
        Some(value) if !value.contains('@') => {
            Err(MazuriError::invalid("email", "invalid email format"))
        }
        _ => Ok(()),
    }
}

/// Normalize an optional text field: blank input means "no value"
pub fn optional_text(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_require_text_rejects_blank() {
        assert!(require_text("name", "Mojito").is_ok());
        assert!(matches!(
            require_text("name", "  \t"),
            Err(MazuriError::InvalidInput { field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_price_zero_is_allowed() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(8.5).is_ok());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_quantity_must_be_positive() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email(None).is_ok());
        assert!(validate_email(Some("a@x.com")).is_ok());
        assert!(validate_email(Some("not-an-email")).is_err());
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("   "), None);
        assert_eq!(optional_text(" classic "), Some("classic".to_string()));
    }

    proptest! {
        #[test]
        fn prop_non_negative_prices_accepted(price in 0.0f64..1_000_000.0) {
            prop_assert!(validate_price(price).is_ok());
        }

        #[test]
        fn prop_negative_prices_rejected(price in -1_000_000.0f64..-0.0001) {
            prop_assert!(validate_price(price).is_err());
        }

        #[test]
        fn prop_emails_without_at_rejected(local in "[a-z0-9.]{1,20}") {
            prop_assert!(validate_email(Some(&local)).is_err());
            let with_at = format!("{}@bar.test", local);
            prop_assert!(validate_email(Some(&with_at)).is_ok());
        }
    }
}
