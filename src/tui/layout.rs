use ratatui::layout::{Constraint, Direction, Layout as RatLayout, Rect};

pub struct Layout {
    pub inner_area: Rect, // Area inside the outer border
    pub header_area: Rect,
    pub input_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl Layout {
    /// Minimum terminal dimensions required for the application
    /// Width: 36 columns keeps the points line and gauge readable
    /// Height: 13 lines (2 outer borders + 4 header + 3 input + 3 list + 1 status)
    pub const MIN_WIDTH: u16 = 36;
    pub const MIN_HEIGHT: u16 = 13;

    pub fn calculate(size: Rect) -> Self {
        // Ensure minimum terminal size (accounting for outer border)
        let width = size.width.max(Self::MIN_WIDTH + 2);
        let height = size.height.max(Self::MIN_HEIGHT + 2);
        let size = Rect::new(size.x, size.y, width, height);

        // Inner area (accounting for outer border: 1 char on each side)
        let inner_area = Rect::new(
            size.x + 1,
            size.y + 1,
            size.width.saturating_sub(2),
            size.height.saturating_sub(2),
        );

        // Split vertically: header (points + progress), input box, task list, status line
        let vertical = RatLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header: points line + gauge inside borders
                Constraint::Length(3), // Draft input (borders + one line)
                Constraint::Min(1),    // Task list
                Constraint::Length(1), // Status
            ])
            .split(inner_area);

        Self {
            inner_area,
            header_area: vertical[0],
            input_area: vertical[1],
            list_area: vertical[2],
            status_area: vertical[3],
        }
    }
}
