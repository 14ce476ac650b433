use lista_core::Money;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the title and the grand total.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let config = app.editor.config();
    let total = config.format_currency(app.editor.total());

    let line = Line::from(vec![
        Span::raw("Total: "),
        Span::styled(
            total,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Total line as plain text, e.g. `Total: R$ 69.00`.
pub fn total_text(app: &App) -> String {
    let total: Money = app.editor.total();
    format!("Total: {}", app.editor.config().format_currency(total))
}
