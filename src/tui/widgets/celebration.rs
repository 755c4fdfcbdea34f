use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::Config;
use crate::rewards::Celebration;
use crate::tui::widgets::color::parse_color;

/// Centered reward popup shown while a celebration is active.
pub fn render_celebration(f: &mut Frame, area: Rect, celebration: &Celebration, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let accent_color = parse_color(&active_theme.accent);

    // Wide enough for the longest message plus padding, tall enough for
    // sticker + points + message rows inside the border
    let width = (celebration.message.chars().count() as u16 + 6).max(26);
    let popup_area = popup_area(area, width.min(area.width), 5);

    // Clear the background first - this prevents content from showing through
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(Span::styled(
            celebration.sticker,
            Style::default().fg(fg_color),
        )),
        Line::from(Span::styled(
            format!("+{} points!", celebration.points_earned),
            Style::default()
                .fg(accent_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            celebration.message,
            Style::default().fg(fg_color),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title("Task Complete!")
                .title_alignment(Alignment::Center)
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect with fixed dimensions
/// Based on ratatui popup example: https://ratatui.rs/examples/apps/popup/
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
