use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Screen areas, top to bottom.
pub struct Areas {
    pub header: Rect,
    pub form: Rect,
    pub form_footer: Rect,
    pub list: Rect,
    pub status: Rect,
}

/// Layout manager for the TUI
pub struct Layout;

impl Layout {
    /// Splits the frame into header, form, list and status bar.
    pub fn main(area: Rect) -> Areas {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + total
                Constraint::Length(3), // Inputs
                Constraint::Length(1), // Submit hint / error
                Constraint::Min(3),    // Items
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Areas {
            header: chunks[0],
            form: chunks[1],
            form_footer: chunks[2],
            list: chunks[3],
            status: chunks[4],
        }
    }

    /// Splits the form row into name, price and quantity inputs (2:1:1).
    pub fn inputs(area: Rect) -> [Rect; 3] {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(2, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
            ])
            .split(area);

        [chunks[0], chunks[1], chunks[2]]
    }
}
