//! # Editor
//!
//! Owns the item list and the draft form, and runs the submission workflow.
//!
//! ## Form Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form Submission State Machine                        │
//! │                                                                         │
//! │  ┌──────────┐  edit()   ┌──────────┐  submit()  ┌────────────┐         │
//! │  │   Idle   │──────────►│ Editing  │───────────►│ Submitting │         │
//! │  └──────────┘           └──────────┘            └─────┬──────┘         │
//! │       ▲                                               │                 │
//! │       │   valid:   items.add(item), draft reset       │                 │
//! │       └───────────────────────────────────────────────┘                 │
//! │           invalid: draft kept, error message set                        │
//! │                                                                         │
//! │  remove_at(i) / clear_items(): allowed in any state, draft untouched   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call completes before returning; `Submitting` only exists for the
//! duration of [`Editor::submit`].
//!
//! ## Rendering
//! Renderers query [`Editor::snapshot`] on demand and may compare
//! [`Editor::revision`] to skip redraws when nothing changed.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::config::ListConfig;
use crate::error::ValidationError;
use crate::list::ItemList;
use crate::money::Money;
use crate::types::{DraftField, DraftForm, LineView, ListSnapshot};
use crate::validation::validate;

/// Where the form is in its submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormState {
    /// Nothing typed since the last submission.
    #[default]
    Idle,
    /// Draft text changed since the last submission.
    Editing,
    /// Validation in progress.
    Submitting,
}

/// Result of a submit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was valid; the new item sits at `index`.
    Added { index: usize },
    /// Draft was rejected; nothing changed except the error message.
    Rejected(ValidationError),
}

impl SubmitOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, SubmitOutcome::Added { .. })
    }
}

/// The shopping list editor.
#[derive(Debug, Clone)]
pub struct Editor {
    config: ListConfig,
    items: ItemList,
    draft: DraftForm,
    state: FormState,
    revision: u64,
}

impl Editor {
    /// Creates an editor, seeded with the sample items when
    /// `config.seed` is set.
    pub fn new(config: ListConfig) -> Self {
        let items = if config.seed {
            ItemList::seeded()
        } else {
            ItemList::new()
        };
        Editor::with_items(config, items)
    }

    /// Creates an editor over an existing list.
    pub fn with_items(config: ListConfig, items: ItemList) -> Self {
        Editor {
            config,
            items,
            draft: DraftForm::new(),
            state: FormState::Idle,
            revision: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Current list value. Cloning it is cheap and the clone never changes.
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Message from the last rejected submission.
    pub fn error(&self) -> Option<&str> {
        self.draft.error.as_deref()
    }

    /// Bumped on every change to the list or the draft.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Grand total, recomputed from the current list.
    pub fn total(&self) -> Money {
        self.items.total()
    }

    /// Serializable view of the whole widget.
    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            items: self
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| LineView::from_item(index, item))
                .collect(),
            item_count: self.items.len(),
            total_quantity: self.items.total_quantity(),
            total: self.items.total(),
            draft: self.draft.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Draft edits
    // -------------------------------------------------------------------------

    /// Replaces the text of one field. No validation happens here.
    pub fn edit(&mut self, field: DraftField, text: impl Into<String>) {
        *self.draft.field_mut(field) = text.into();
        self.touch_draft();
    }

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.edit(DraftField::Name, text);
    }

    pub fn set_price(&mut self, text: impl Into<String>) {
        self.edit(DraftField::Price, text);
    }

    pub fn set_quantity(&mut self, text: impl Into<String>) {
        self.edit(DraftField::Quantity, text);
    }

    /// Appends one typed character to a field.
    pub fn push_char(&mut self, field: DraftField, c: char) {
        self.draft.field_mut(field).push(c);
        self.touch_draft();
    }

    /// Deletes the last character of a field.
    pub fn pop_char(&mut self, field: DraftField) {
        if self.draft.field_mut(field).pop().is_some() {
            self.touch_draft();
        }
    }

    fn touch_draft(&mut self) {
        self.state = FormState::Editing;
        self.revision += 1;
    }

    // -------------------------------------------------------------------------
    // Workflow transitions
    // -------------------------------------------------------------------------

    /// Validates the draft and, if valid, appends it to the list.
    ///
    /// ## Behavior
    /// - Any previous error is cleared first
    /// - Valid: item appended, draft reset to `"", "", "1"`
    /// - Invalid: draft text kept, error set to the fixed message
    /// - Either way the form ends in [`FormState::Idle`]
    pub fn submit(&mut self) -> SubmitOutcome {
        self.state = FormState::Submitting;
        self.draft.error = None;
        self.revision += 1;

        let outcome = match validate(&self.draft) {
            Ok(item) => {
                debug!(
                    name = %item.name(),
                    unit_price = %item.unit_price(),
                    quantity = item.quantity(),
                    "item added"
                );
                self.items = self.items.add(item);
                self.draft.reset();
                SubmitOutcome::Added {
                    index: self.items.len() - 1,
                }
            }
            Err(err) => {
                warn!(reason = %err, "submission rejected");
                self.draft.error = Some(err.user_message().to_string());
                SubmitOutcome::Rejected(err)
            }
        };

        self.state = FormState::Idle;
        outcome
    }

    /// Removes the item at `index`.
    ///
    /// Returns `false` for an out-of-range index, which leaves everything
    /// as it was.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "remove_at ignored stale index");
            return false;
        }

        self.items = self.items.remove_at(index);
        self.revision += 1;
        debug!(index, len = self.items.len(), "item removed");
        true
    }

    /// Removes every item. The draft is left alone.
    pub fn clear_items(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items = self.items.clear();
        self.revision += 1;
        debug!("list cleared");
    }
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new(ListConfig::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
