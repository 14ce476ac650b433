//! # Item List
//!
//! The ordered, copy-on-write sequence of line items.
//!
//! ## Copy-on-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ItemList Operations                                  │
//! │                                                                         │
//! │  before = [Arroz, Feijão, Macarrão]        (Arc<[LineItem]>)            │
//! │                                                                         │
//! │  after = before.add(Leite)                                              │
//! │      before ──► [Arroz, Feijão, Macarrão]        unchanged              │
//! │      after  ──► [Arroz, Feijão, Macarrão, Leite] new allocation        │
//! │                                                                         │
//! │  after.remove_at(7)  ──► same contents as `after` (stale index no-op)  │
//! │  after.remove_at(3)  ──► equal to `before`                             │
//! │                                                                         │
//! │  Cloning an ItemList only bumps a reference count.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use crate::money::Money;
use crate::types::LineItem;

/// Ordered list of validated items. Insertion order is display order.
///
/// ## Invariants
/// - Every element satisfies the [`LineItem`] constraints (guaranteed by
///   the type, checked once when the item was built)
/// - No operation mutates an existing value; each returns a new list
#[derive(Debug, Clone, PartialEq)]
pub struct ItemList {
    items: Arc<[LineItem]>,
}

impl ItemList {
    /// Creates an empty list.
    pub fn new() -> Self {
        ItemList {
            items: Arc::from(Vec::new()),
        }
    }

    /// Creates a list holding `items` in the given order.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        ItemList {
            items: Arc::from(items),
        }
    }

    /// The three sample items the widget starts with.
    ///
    /// ## Example
    /// ```rust
    /// use lista_core::ItemList;
    ///
    /// let list = ItemList::seeded();
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.total().to_string(), "69.00");
    /// ```
    pub fn seeded() -> Self {
        ItemList::from_items(vec![
            LineItem::trusted("Arroz", Money::new(20.0), 2),
            LineItem::trusted("Feijão", Money::new(8.0), 3),
            LineItem::trusted("Macarrão", Money::new(5.0), 1),
        ])
    }

    /// Returns a new list with `item` appended.
    pub fn add(&self, item: LineItem) -> ItemList {
        let items: Arc<[LineItem]> = self
            .items
            .iter()
            .cloned()
            .chain(std::iter::once(item))
            .collect();
        ItemList { items }
    }

    /// Returns a new list without the element at `index`.
    ///
    /// An out-of-range index yields an unchanged list; a stale index from
    /// an older render is not an error.
    pub fn remove_at(&self, index: usize) -> ItemList {
        if index >= self.items.len() {
            return self.clone();
        }

        let items: Arc<[LineItem]> = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect();
        ItemList { items }
    }

    /// Returns an empty list.
    pub fn clear(&self) -> ItemList {
        ItemList::new()
    }

    /// Grand total: sum of `unit_price × quantity` in display order,
    /// unrounded. Zero for an empty list.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total number of units across all items.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.quantity()))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a display position.
    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Items in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[LineItem] {
        &self.items
    }
}

impl Default for ItemList {
    fn default() -> Self {
        ItemList::new()
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
