//! # Error Types
//!
//! Domain-specific error types for lista-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lista-core errors (this file)                                         │
//! │  ├── ValidationError  - Draft rejected on submit                       │
//! │  └── ConfigError      - Bad environment value at startup               │
//! │                                                                         │
//! │  lista-tui errors (app)                                                │
//! │  └── anyhow::Error    - Terminal setup / I/O failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → Editor (error message on the draft) → UI      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. `Display` names the precise cause for logs; the user only ever sees
//!    [`ValidationError::user_message`]

use thiserror::Error;

use crate::VALIDATION_MESSAGE;

// =============================================================================
// Validation Error
// =============================================================================

/// Reasons a draft cannot become a line item.
///
/// ## User Workflow
/// ```text
/// Submit (name: "Leite", price: "-1", quantity: "2")
///      │
///      ▼
/// validate() → InvalidPrice
///      │
///      ▼
/// UI shows: "Preencha um nome, um preço válido (>= 0) e uma quantidade inteira (>= 1)."
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty after trimming.
    #[error("name is required")]
    EmptyName,

    /// Price is unparsable, not finite, or negative.
    #[error("price must be a number >= 0")]
    InvalidPrice,

    /// Quantity is unparsable, not an integer, or below 1.
    #[error("quantity must be an integer >= 1")]
    InvalidQuantity,
}

impl ValidationError {
    /// The fixed message shown on screen, identical for every variant.
    pub fn user_message(&self) -> &'static str {
        VALIDATION_MESSAGE
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::EmptyName.to_string(), "name is required");
        assert_eq!(
            ValidationError::InvalidPrice.to_string(),
            "price must be a number >= 0"
        );
        assert_eq!(
            ValidationError::InvalidQuantity.to_string(),
            "quantity must be an integer >= 1"
        );
    }

    #[test]
    fn test_user_message_is_shared() {
        let messages = [
            ValidationError::EmptyName.user_message(),
            ValidationError::InvalidPrice.user_message(),
            ValidationError::InvalidQuantity.user_message(),
        ];
        assert!(messages.iter().all(|m| *m == VALIDATION_MESSAGE));
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::InvalidValue {
            var: "LISTA_SEED".to_string(),
            value: "maybe".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LISTA_SEED: \"maybe\"");
    }
}
