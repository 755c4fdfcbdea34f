use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::Config;
use crate::models::Priority;
use crate::tui::widgets::color::parse_color;
use crate::tui::widgets::input::Input;
use crate::tui::widgets::task_list::priority_color;

pub fn render_task_input(
    f: &mut Frame,
    area: Rect,
    input: &Input,
    priority: Priority,
    active: bool,
    config: &Config,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);

    let title = if active {
        format!("New Task — {} priority (Tab to change)", priority.label())
    } else {
        "New Task".to_string()
    };

    let border_style = if active {
        Style::default().fg(highlight_bg)
    } else {
        Style::default().fg(fg_color)
    };

    let content = if !active && input.value().is_empty() {
        Paragraph::new("Press 'a' to add a task…")
            .style(Style::default().fg(fg_color).add_modifier(Modifier::DIM))
    } else {
        Paragraph::new(input.value()).style(Style::default().fg(fg_color))
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);
    if active {
        block = block.title_style(Style::default().fg(priority_color(priority)));
    }
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(content, inner);

    // Place the terminal cursor at the edit position while typing
    if active {
        let x = inner.x + input.cursor().min(inner.width.saturating_sub(1) as usize) as u16;
        f.set_cursor_position(Position::new(x, inner.y));
    }
}
