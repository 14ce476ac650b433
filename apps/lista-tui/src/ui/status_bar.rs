use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};

/// Render the bottom bar: key hints, last action, clock.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::Field(_) => "Tab: próximo  Enter: adicionar  Ctrl-L: limpar  Esc: sair",
        Focus::List => "↑↓: selecionar  d/Del: remover  Tab: formulário  Esc: sair",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];

    if let Some(message) = &app.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(Color::Cyan)));
    }

    let time_str = Local::now().format("%H:%M:%S").to_string();
    let width = area.width as usize;
    let current_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = width.saturating_sub(current_len + time_str.len() + 1);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        format!("{} ", time_str),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
