use lista_core::{LineView, ListConfig};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

/// Render the item rows.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::List;
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };
    let snapshot = app.editor.snapshot();
    let config = app.editor.config();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Itens ({}) ", snapshot.item_count))
        .border_style(Style::default().fg(border_color));

    if snapshot.items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Nenhum item na lista",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<ListItem> = snapshot
        .items
        .iter()
        .map(|view| ListItem::new(row_line(config, view)))
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_symbol("» ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected));
    }

    f.render_stateful_widget(list, area, &mut state);
}

fn row_line(config: &ListConfig, view: &LineView) -> Line<'static> {
    Line::from(vec![
        Span::raw(row_text(config, view)),
        Span::styled("  [d] Remover", Style::default().fg(Color::DarkGray)),
    ])
}

/// One row as plain text, e.g. `Arroz — R$ 20.00 × 2 = R$ 40.00`.
pub fn row_text(config: &ListConfig, view: &LineView) -> String {
    format!(
        "{} — {} × {} = {}",
        view.name,
        config.format_currency(view.unit_price),
        view.quantity,
        config.format_currency(view.line_total),
    )
}
