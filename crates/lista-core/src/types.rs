//! # Domain Types
//!
//! Core domain types used throughout Lista.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   DraftForm     │   │    LineItem     │   │  ListSnapshot   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name  (text)   │──►│  name (trimmed) │──►│  items (rows)   │       │
//! │  │  price (text)   │   │  unit_price     │   │  total          │       │
//! │  │  quantity(text) │   │  quantity >= 1  │   │  draft          │       │
//! │  │  error          │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘     validate()            Editor::snapshot()      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::DEFAULT_QUANTITY_TEXT;

// =============================================================================
// Line Item
// =============================================================================

/// One validated entry in the shopping list.
///
/// Fields are private: a `LineItem` can only be obtained through
/// [`LineItem::new`] or [`validate`](crate::validation::validate), so every
/// instance satisfies the name/price/quantity constraints.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    name: String,
    unit_price: Money,
    quantity: i64,
}

impl LineItem {
    /// Builds a line item from already-typed values.
    ///
    /// The name is trimmed. Fails with the same errors as draft validation.
    ///
    /// ## Example
    /// ```rust
    /// use lista_core::{LineItem, Money, ValidationError};
    ///
    /// let item = LineItem::new(" Arroz ", Money::new(20.0), 2).unwrap();
    /// assert_eq!(item.name(), "Arroz");
    /// assert_eq!(item.line_total().amount(), 40.0);
    ///
    /// let err = LineItem::new("Arroz", Money::new(20.0), 0).unwrap_err();
    /// assert_eq!(err, ValidationError::InvalidQuantity);
    /// ```
    pub fn new(
        name: impl AsRef<str>,
        unit_price: Money,
        quantity: i64,
    ) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !unit_price.is_finite() || unit_price.is_negative() {
            return Err(ValidationError::InvalidPrice);
        }
        if quantity < 1 {
            return Err(ValidationError::InvalidQuantity);
        }

        Ok(LineItem {
            name: name.to_string(),
            unit_price,
            quantity,
        })
    }

    /// Builds an item from constants known to satisfy the constraints.
    pub(crate) fn trusted(name: &str, unit_price: Money, quantity: i64) -> Self {
        debug_assert!(!name.trim().is_empty() && !unit_price.is_negative() && quantity >= 1);
        LineItem {
            name: name.to_string(),
            unit_price,
            quantity,
        }
    }

    /// Item name, trimmed and non-empty.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of one unit, exactly as parsed.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Number of units, always >= 1.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Calculates the line total (unit price × quantity), unrounded.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Draft Form
// =============================================================================

/// The in-progress, unvalidated text of the "new item" form.
///
/// Holds whatever the user typed; nothing is checked until submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DraftForm {
    pub name: String,
    pub price: String,
    pub quantity: String,
    /// Message from the last rejected submission, if any.
    pub error: Option<String>,
}

impl DraftForm {
    /// Creates an empty draft: blank name and price, quantity `"1"`.
    pub fn new() -> Self {
        DraftForm {
            name: String::new(),
            price: String::new(),
            quantity: DEFAULT_QUANTITY_TEXT.to_string(),
            error: None,
        }
    }

    /// Returns the text of one field.
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Price => &self.price,
            DraftField::Quantity => &self.quantity,
        }
    }

    /// Mutable access to one field's text.
    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Price => &mut self.price,
            DraftField::Quantity => &mut self.quantity,
        }
    }

    /// Resets text fields to the empty draft and clears the error.
    pub fn reset(&mut self) {
        *self = DraftForm::new();
    }
}

impl Default for DraftForm {
    fn default() -> Self {
        DraftForm::new()
    }
}

// =============================================================================
// Draft Field
// =============================================================================

/// The three text inputs of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DraftField {
    Name,
    Price,
    Quantity,
}

impl DraftField {
    /// All fields in tab order.
    pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::Price, DraftField::Quantity];

    /// Input label.
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Item",
            DraftField::Price => "Preço",
            DraftField::Quantity => "Qtd",
        }
    }

    /// Hint shown while the input is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::Name => "Ex.: Leite",
            DraftField::Price => "Ex.: 6.50",
            DraftField::Quantity => "1",
        }
    }
}

// =============================================================================
// Snapshot DTOs
// =============================================================================

/// One row of the rendered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineView {
    /// Current display position; the argument for `remove_at`.
    pub index: usize,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

impl LineView {
    /// Builds the row for the item at `index`.
    pub fn from_item(index: usize, item: &LineItem) -> Self {
        LineView {
            index,
            name: item.name().to_string(),
            unit_price: item.unit_price(),
            quantity: item.quantity(),
            line_total: item.line_total(),
        }
    }
}

/// Everything a renderer needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ListSnapshot {
    pub items: Vec<LineView>,
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
    pub draft: DraftForm,
}

// =============================================================================
// Unit Tests
// =============================================================================
