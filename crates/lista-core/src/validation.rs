//! # Validation Module
//!
//! Turns the raw text of a [`DraftForm`] into a [`LineItem`].
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Draft → LineItem                                   │
//! │                                                                         │
//! │  name      trim ──► empty?               ──► EmptyName                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  price     trim ──► blank? ──► 0                                        │
//! │     │               f64? finite? >= 0?   ──► InvalidPrice              │
//! │     ▼                                                                   │
//! │  quantity  trim ──► base-10 integer? >= 1 ──► InvalidQuantity          │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  LineItem { name, unit_price, quantity }                               │
//! │                                                                         │
//! │  Checks run top to bottom; the first failure is returned.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lista_core::{validate, DraftForm, ValidationError};
//!
//! let draft = DraftForm {
//!     name: " Leite ".to_string(),
//!     price: "6.50".to_string(),
//!     quantity: "2".to_string(),
//!     error: None,
//! };
//! let item = validate(&draft).unwrap();
//! assert_eq!(item.name(), "Leite");
//! assert_eq!(item.unit_price().amount(), 6.5);
//!
//! let bad = DraftForm { price: "-1".to_string(), ..draft };
//! assert_eq!(validate(&bad), Err(ValidationError::InvalidPrice));
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{DraftForm, LineItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a draft and builds the line item it describes.
///
/// Pure: the draft is only read.
pub fn validate(draft: &DraftForm) -> ValidationResult<LineItem> {
    let name = validate_name(&draft.name)?;
    let unit_price = parse_price(&draft.price)?;
    let quantity = parse_quantity(&draft.quantity)?;

    LineItem::new(name, unit_price, quantity)
}

// =============================================================================
// Field Validators
// =============================================================================

/// Trims a name and rejects it if nothing is left.
///
/// ## Example
/// ```rust
/// use lista_core::validation::validate_name;
///
/// assert_eq!(validate_name("  Arroz ").unwrap(), "Arroz");
/// assert!(validate_name(" \t ").is_err());
/// ```
pub fn validate_name(raw: &str) -> ValidationResult<&str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name)
}

/// Parses a unit price.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - A blank price means a free item (zero)
/// - Otherwise must parse as a real number (`"6.50"`, `"6"`, `".5"`, `"1e2"`)
/// - Must be finite and not negative; zero is allowed
/// - The parsed value is kept as is; nothing is rounded here
///
/// ## Example
/// ```rust
/// use lista_core::validation::parse_price;
///
/// assert_eq!(parse_price("6.50").unwrap().amount(), 6.5);
/// assert_eq!(parse_price("1.999").unwrap().amount(), 1.999);
/// assert!(parse_price("").unwrap().is_zero());
/// assert!(parse_price("abc").is_err());
/// assert!(parse_price("-1").is_err());
/// assert!(parse_price("inf").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Money::zero());
    }

    let value: f64 = raw.parse().map_err(|_| ValidationError::InvalidPrice)?;

    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }

    // "-0" parses to negative zero
    let value = if value == 0.0 { 0.0 } else { value };
    Ok(Money::new(value))
}

/// Parses a quantity as a base-10 integer.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be a whole number literal; `"2.5"` and `"2abc"` are rejected
/// - Must be at least 1
///
/// ## Example
/// ```rust
/// use lista_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
/// assert!(parse_quantity("0").is_err());
/// assert!(parse_quantity("2.5").is_err());
/// ```
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let quantity: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidQuantity)?;

    if quantity < 1 {
        return Err(ValidationError::InvalidQuantity);
    }

    Ok(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str, quantity: &str) -> DraftForm {
        DraftForm {
            name: name.to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
            error: None,
        }
    }

    #[test]
    fn test_validate_normalizes_values() {
        let item = validate(&draft(" Leite ", "6.50", "2")).unwrap();
        assert_eq!(item.name(), "Leite");
        assert_eq!(item.unit_price(), Money::new(6.5));
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn test_validate_accepts_padded_numbers() {
        let item = validate(&draft("Pão", " 0.75 ", " 10 ")).unwrap();
        assert_eq!(item.unit_price().amount(), 0.75);
        assert_eq!(item.quantity(), 10);
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(
            validate(&draft("", "1", "1")),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate(&draft("   \t", "1", "1")),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_validate_price() {
        for bad in ["abc", "-1", "-0.01", "NaN", "inf", "-inf", "1,50", "6.50 reais"] {
            assert_eq!(
                validate(&draft("Leite", bad, "1")),
                Err(ValidationError::InvalidPrice),
                "price {:?} should be rejected",
                bad
            );
        }

        assert!(validate(&draft("Leite", "0", "1")).is_ok());
        assert!(validate(&draft("Leite", "-0", "1")).is_ok());
        assert!(validate(&draft("Leite", "1e2", "1")).is_ok());
        assert!(!parse_price("-0").unwrap().amount().is_sign_negative());
    }

    #[test]
    fn test_blank_price_is_free() {
        for blank in ["", "  ", "\t"] {
            let item = validate(&draft("Leite", blank, "1")).unwrap();
            assert!(item.unit_price().is_zero());
            assert!(item.line_total().is_zero());
        }
    }

    #[test]
    fn test_sub_cent_price_kept_exactly() {
        let item = validate(&draft("x", "1.999", "1")).unwrap();
        assert_eq!(item.unit_price().amount(), 1.999);
        assert_eq!(item.line_total().to_string(), "2.00");

        let item = validate(&draft("x", "0.004", "3")).unwrap();
        assert_eq!(item.unit_price().amount(), 0.004);
        assert_eq!(item.line_total().to_string(), "0.01");
    }

    #[test]
    fn test_price_range() {
        assert_eq!(parse_price("1e300").map(|m| m.amount()), Ok(1e300));
        // overflows to infinity
        assert_eq!(parse_price("1e400"), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn test_validate_quantity() {
        for bad in ["", "abc", "0", "-1", "2.5", "1.0", "2abc", "99999999999999999999"] {
            assert_eq!(
                validate(&draft("Leite", "1", bad)),
                Err(ValidationError::InvalidQuantity),
                "quantity {:?} should be rejected",
                bad
            );
        }

        assert_eq!(parse_quantity("+4"), Ok(4));
    }

    #[test]
    fn test_first_failure_wins() {
        assert_eq!(
            validate(&draft(" ", "-1", "0")),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate(&draft("Leite", "-1", "0")),
            Err(ValidationError::InvalidPrice)
        );
    }

    #[test]
    fn test_validate_does_not_touch_draft() {
        let original = draft(" Leite ", "6.50", "2");
        let copy = original.clone();
        let _ = validate(&original);
        assert_eq!(original, copy);
    }
}
