//! # Application State
//!
//! Maps key events onto [`Editor`] operations and tracks what only the
//! terminal cares about: which widget has focus and which row is selected.
//!
//! ## Key Bindings
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Anywhere        Tab / Shift-Tab   cycle Item → Preço → Qtd → list      │
//! │                  Ctrl-L            clear the list                       │
//! │                  Esc / Ctrl-C      quit                                 │
//! │                                                                         │
//! │  Form field      typing / Backspace  edit the draft                     │
//! │                  Enter               submit (Adicionar)                 │
//! │                                                                         │
//! │  List            ↑ ↓ / k j           move selection                     │
//! │                  Delete / d          remove selected row (Remover)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lista_core::{DraftField, Editor, ListConfig, SubmitOutcome};
use tracing::debug;

/// Which widget receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(DraftField),
    List,
}

impl Focus {
    /// Next widget in tab order.
    pub fn next(&self) -> Self {
        match self {
            Focus::Field(DraftField::Name) => Focus::Field(DraftField::Price),
            Focus::Field(DraftField::Price) => Focus::Field(DraftField::Quantity),
            Focus::Field(DraftField::Quantity) => Focus::List,
            Focus::List => Focus::Field(DraftField::Name),
        }
    }

    /// Previous widget in tab order.
    pub fn prev(&self) -> Self {
        match self {
            Focus::Field(DraftField::Name) => Focus::List,
            Focus::Field(DraftField::Price) => Focus::Field(DraftField::Name),
            Focus::Field(DraftField::Quantity) => Focus::Field(DraftField::Price),
            Focus::List => Focus::Field(DraftField::Quantity),
        }
    }
}

/// Main application state.
pub struct App {
    /// The shopping list and its draft.
    pub editor: Editor,

    /// Widget with keyboard focus.
    pub focus: Focus,

    /// Highlighted row when the list has focus.
    pub selected: usize,

    /// Short feedback line (shown in the status bar).
    pub status_message: Option<String>,

    /// Should quit?
    pub should_quit: bool,
}

impl App {
    /// Creates the app with focus on the name field.
    pub fn new(config: ListConfig) -> Self {
        App {
            editor: Editor::new(config),
            focus: Focus::Field(DraftField::Name),
            selected: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('l') if ctrl => self.clear_list(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            _ => match self.focus {
                Focus::Field(field) => self.handle_field_key(field, key),
                Focus::List => self.handle_list_key(key),
            },
        }
    }

    fn handle_field_key(&mut self, field: DraftField, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.editor.pop_char(field),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.editor.push_char(field, c)
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.editor.items().len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Delete | KeyCode::Char('d') => self.remove_selected(),
            _ => {}
        }
    }

    /// Runs the submission workflow.
    pub fn submit(&mut self) {
        match self.editor.submit() {
            SubmitOutcome::Added { index } => {
                let name = self
                    .editor
                    .items()
                    .get(index)
                    .map(|item| item.name().to_string())
                    .unwrap_or_default();
                self.status_message = Some(format!("Adicionado: {}", name));
                self.selected = index;
                self.focus = Focus::Field(DraftField::Name);
            }
            SubmitOutcome::Rejected(reason) => {
                debug!(%reason, "draft kept for correction");
                self.status_message = None;
            }
        }
    }

    /// Removes the highlighted row.
    pub fn remove_selected(&mut self) {
        let name = self
            .editor
            .items()
            .get(self.selected)
            .map(|item| item.name().to_string());

        if self.editor.remove_at(self.selected) {
            if let Some(name) = name {
                self.status_message = Some(format!("Removido: {}", name));
            }
        }
        self.clamp_selection();
    }

    /// Empties the list.
    pub fn clear_list(&mut self) {
        self.editor.clear_items();
        self.selected = 0;
        self.status_message = Some("Lista limpa".to_string());
    }

    fn clamp_selection(&mut self) {
        let len = self.editor.items().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lista_core::VALIDATION_MESSAGE;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = App::new(ListConfig::default());
        assert_eq!(app.focus, Focus::Field(DraftField::Name));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Field(DraftField::Price));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Field(DraftField::Quantity));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Field(DraftField::Name));

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_type_and_submit() {
        let mut app = App::new(ListConfig::default());

        type_text(&mut app, " Leite ");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "6.50");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "2");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.editor.items().len(), 4);
        assert_eq!(app.editor.total().cents(), 8200);
        assert_eq!(app.editor.draft().quantity, "1");
        assert_eq!(app.focus, Focus::Field(DraftField::Name));
        assert_eq!(app.selected, 3);
        assert_eq!(app.status_message.as_deref(), Some("Adicionado: Leite"));
    }

    #[test]
    fn test_rejected_submit_keeps_draft() {
        let mut app = App::new(ListConfig::default());
        type_text(&mut app, "Leite");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "-1");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.editor.items().len(), 3);
        assert_eq!(app.editor.error(), Some(VALIDATION_MESSAGE));
        assert_eq!(app.editor.draft().price, "-1");
        assert_eq!(app.focus, Focus::Field(DraftField::Price));
    }

    #[test]
    fn test_list_navigation_and_removal() {
        let mut app = App::new(ListConfig::default());
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::List);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 2);

        press(&mut app, KeyCode::Delete);
        assert_eq!(app.editor.items().len(), 2);
        assert_eq!(app.selected, 1);
        assert_eq!(app.status_message.as_deref(), Some("Removido: Macarrão"));

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.editor.items().len(), 1);
        assert_eq!(app.editor.items().get(0).map(|i| i.name()), Some("Feijão"));
    }

    #[test]
    fn test_remove_on_empty_list_is_noop() {
        let config = ListConfig {
            seed: false,
            ..ListConfig::default()
        };
        let mut app = App::new(config);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Delete);
        assert!(app.editor.items().is_empty());
        assert_eq!(app.selected, 0);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_letters_in_list_focus_do_not_edit_draft() {
        let mut app = App::new(ListConfig::default());
        press(&mut app, KeyCode::BackTab);
        type_text(&mut app, "xyz");
        assert_eq!(app.editor.draft().name, "");
    }

    #[test]
    fn test_ctrl_keys() {
        let mut app = App::new(ListConfig::default());
        ctrl(&mut app, 'l');
        assert!(app.editor.items().is_empty());
        assert_eq!(app.editor.draft().name, "");

        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = App::new(ListConfig::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new(ListConfig::default());
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.editor.draft().name, "");
    }
}
