//! Frame composition.
//!
//! Everything drawn here is read from `App` and `Editor::snapshot()`;
//! rendering never changes state.

pub mod form;
pub mod header;
pub mod item_list;
pub mod layout;
pub mod status_bar;

use ratatui::Frame;

use crate::app::App;

/// Render the entire UI
pub fn render(f: &mut Frame, app: &App) {
    let areas = layout::Layout::main(f.area());

    header::render(f, areas.header, app);
    form::render_inputs(f, areas.form, app);
    form::render_footer(f, areas.form_footer, app);
    item_list::render(f, areas.list, app);
    status_bar::render(f, areas.status, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use lista_core::{ListConfig, VALIDATION_MESSAGE};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn screen_contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    #[test]
    fn test_render_seed_list() {
        let app = App::new(ListConfig::default());
        let lines = draw(&app);

        assert!(screen_contains(&lines, "Lista de Compras"));
        assert!(screen_contains(&lines, "Total: R$ 69.00"));
        assert!(screen_contains(&lines, "Arroz — R$ 20.00 × 2 = R$ 40.00"));
        assert!(screen_contains(&lines, "Feijão — R$ 8.00 × 3 = R$ 24.00"));
        assert!(screen_contains(&lines, "Macarrão — R$ 5.00 × 1 = R$ 5.00"));
        assert!(screen_contains(&lines, "Ex.: Leite"));
    }

    #[test]
    fn test_render_error_message() {
        let mut app = App::new(ListConfig::default());
        app.editor.set_price("-1");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let lines = draw(&app);
        assert!(screen_contains(&lines, VALIDATION_MESSAGE));
        assert!(screen_contains(&lines, "Total: R$ 69.00"));
    }

    #[test]
    fn test_render_empty_list() {
        let config = ListConfig {
            seed: false,
            currency_label: "US$".to_string(),
            ..ListConfig::default()
        };
        let app = App::new(config);
        let lines = draw(&app);

        assert!(screen_contains(&lines, "Nenhum item na lista"));
        assert!(screen_contains(&lines, "Total: US$ 0.00"));
    }

    #[test]
    fn test_render_rounds_sub_cent_totals() {
        let config = ListConfig {
            seed: false,
            ..ListConfig::default()
        };
        let mut app = App::new(config);
        app.editor.set_name("Parafuso");
        app.editor.set_price("0.004");
        app.editor.set_quantity("3");
        app.submit();

        let lines = draw(&app);
        assert!(screen_contains(&lines, "Parafuso — R$ 0.00 × 3 = R$ 0.01"));
        assert!(screen_contains(&lines, "Total: R$ 0.01"));
    }

    #[test]
    fn test_text_helpers() {
        let app = App::new(ListConfig::default());
        let snapshot = app.editor.snapshot();

        assert_eq!(header::total_text(&app), "Total: R$ 69.00");
        assert_eq!(
            item_list::row_text(app.editor.config(), &snapshot.items[0]),
            "Arroz — R$ 20.00 × 2 = R$ 40.00"
        );
    }
}
