use lista_core::DraftField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::layout::Layout;

/// Render the three draft inputs.
pub fn render_inputs(f: &mut Frame, area: Rect, app: &App) {
    let draft = app.editor.draft();

    for (field, input_area) in DraftField::ALL.into_iter().zip(Layout::inputs(area)) {
        let focused = app.focus == Focus::Field(field);
        let border_color = if focused { Color::Yellow } else { Color::DarkGray };
        let value = draft.field(field);

        let text = if value.is_empty() {
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(value)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", field.label()))
            .border_style(Style::default().fg(border_color));

        f.render_widget(Paragraph::new(Line::from(text)).block(block), input_area);

        if focused {
            let width = value.chars().count() as u16;
            let max_x = input_area.x + input_area.width.saturating_sub(2);
            let x = (input_area.x + 1 + width).min(max_x);
            f.set_cursor_position((x, input_area.y + 1));
        }
    }
}

/// Render the submit hint and, after a rejected submit, the error.
pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " [Enter] Adicionar ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(error) = app.editor.error() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(error, Style::default().fg(Color::Red)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
