//! # lista-core: Pure Logic for the Lista Shopping List
//!
//! This crate holds everything the shopping list editor does that is not
//! drawing pixels: draft validation, the item list, totals and the form
//! submission workflow. Everything here is a pure function of its input.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Lista Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front end (lista-tui, or a web view)            │   │
//! │  │      Form fields ──► Submit ──► Item rows ──► Remove            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Editor calls / ListSnapshot           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lista-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   list    │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │ ItemList  │  │ validate  │  │   │
//! │  │   │ DraftForm │  │           │  │  total    │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                  ┌───────────┐  ┌───────────┐                  │   │
//! │  │                  │  editor   │  │  config   │                  │   │
//! │  │                  │ workflow  │  │ListConfig │                  │   │
//! │  │                  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO TERMINAL • NO FILES • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, DraftForm, snapshots)
//! - [`money`] - Money type; exact amounts, two-decimal display
//! - [`error`] - Domain error types
//! - [`validation`] - Draft validation
//! - [`list`] - Copy-on-write item list and totals
//! - [`editor`] - Form submission workflow
//! - [`config`] - Display configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use lista_core::{DraftField, Editor, ListConfig};
//!
//! let mut editor = Editor::new(ListConfig::default());
//! assert_eq!(editor.total().cents(), 6900); // seed list: R$ 69.00
//!
//! editor.edit(DraftField::Name, " Leite ");
//! editor.edit(DraftField::Price, "6.50");
//! editor.edit(DraftField::Quantity, "2");
//! editor.submit();
//!
//! assert_eq!(editor.total().cents(), 8200);
//! assert_eq!(editor.items().len(), 4);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod editor;
pub mod error;
pub mod list;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::ListConfig;
pub use editor::{Editor, FormState, SubmitOutcome};
pub use error::{ConfigError, ValidationError};
pub use list::ItemList;
pub use money::Money;
pub use types::*;
pub use validation::validate;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity text a fresh or reset draft starts with.
pub const DEFAULT_QUANTITY_TEXT: &str = "1";

/// The one message shown to the user for any rejected submission.
///
/// The three validation causes are deliberately not distinguished here;
/// the specific cause is only logged.
pub const VALIDATION_MESSAGE: &str =
    "Preencha um nome, um preço válido (>= 0) e uma quantidade inteira (>= 1).";

/// Currency label prefixed to every amount on screen.
pub const DEFAULT_CURRENCY_LABEL: &str = "R$";

/// Header title of the list.
pub const DEFAULT_TITLE: &str = "Lista de Compras";
