use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::Board;
use crate::Config;
use crate::tui::widgets::color::parse_color;

/// Header panel: running point total, completed/total counts and a
/// progress gauge.
pub fn render_points_panel(f: &mut Frame, area: Rect, board: &Board, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let accent_color = parse_color(&active_theme.accent);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Points")
        .style(Style::default().fg(fg_color).bg(bg_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let completed = board.completed_count();
    let total = board.tasks().len();
    let summary = Line::from(vec![
        Span::styled(
            format!("★ {} points", board.points()),
            Style::default()
                .fg(accent_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}/{} tasks done", completed, total),
            Style::default().fg(fg_color),
        ),
    ]);
    f.render_widget(Paragraph::new(summary), rows[0]);

    let progress = board.progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent_color).bg(bg_color))
        .ratio(progress)
        .label(format!("{:.0}% complete", progress * 100.0));
    f.render_widget(gauge, rows[1]);
}
