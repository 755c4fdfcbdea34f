use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
    ScrollbarState, StatefulWidget,
};

use crate::Config;
use crate::models::{Priority, Task};
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

pub fn render_task_list(
    f: &mut Frame,
    area: Rect,
    tasks: &[Task],
    list_state: &mut ListState,
    config: &Config,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);
    let highlight_fg = if active_theme.highlight_fg.is_empty() {
        get_contrast_text_color(highlight_bg)
    } else {
        parse_color(&active_theme.highlight_fg)
    };

    let title = format!("Tasks ({})", tasks.len());

    if tasks.is_empty() {
        let empty = Paragraph::new("No tasks yet — press 'a' to add one")
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(fg_color));
        f.render_widget(empty, area);
        return;
    }

    // Max width for truncation (2 for borders, 2 for padding)
    let max_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let check = if task.completed { "✓" } else { "○" };

            let mut text = task.text.clone();
            let tag = format!(" [{}]", task.priority.label());
            let budget = max_width.saturating_sub(2 + tag.chars().count());
            if text.chars().count() > budget {
                text = text.chars().take(budget.saturating_sub(3)).collect::<String>() + "...";
            }

            let text_style = if task.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(fg_color)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", check), Style::default().fg(fg_color)),
                Span::styled(text, text_style),
                Span::styled(tag, Style::default().fg(priority_color(task.priority))),
            ]))
        })
        .collect();

    // Reserve a column for the scrollbar
    let list_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let list_area = list_areas[0];
    let scrollbar_area = list_areas[1];

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(fg_color))
        .highlight_style(Style::default().fg(highlight_fg).bg(highlight_bg));

    StatefulWidget::render(list, list_area, f.buffer_mut(), list_state);

    // Render scrollbar only when the list overflows
    let visible_items = list_area.height.saturating_sub(2) as usize;
    if tasks.len() > visible_items && scrollbar_area.width > 0 && list_area.height > 2 {
        let scrollbar_inner_area = Rect::new(
            scrollbar_area.x,
            list_area.y + 1,
            scrollbar_area.width,
            list_area.height.saturating_sub(2),
        );

        let selected_index = list_state.selected().unwrap_or(0);
        let scroll_position = if selected_index < visible_items {
            0
        } else {
            selected_index.saturating_sub(visible_items - 1)
        };

        let mut scrollbar_state = ScrollbarState::new(tasks.len())
            .viewport_content_length(visible_items)
            .position(scroll_position);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        f.render_stateful_widget(scrollbar, scrollbar_inner_area, &mut scrollbar_state);
    }
}
