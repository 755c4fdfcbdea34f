use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::Config;
use crate::tui::widgets::color::parse_color;
use crate::utils::format_key_binding_for_display;

pub fn render_help(f: &mut Frame, area: Rect, config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);

    let popup_area = popup_area(area, 60, 70);

    // Clear the background first - this prevents content from showing through
    f.render_widget(Clear, popup_area);

    let help_text = build_help_text(config);

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help - Key Bindings")
                .title_alignment(Alignment::Center)
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect using up certain percentage of the available rect
/// Based on ratatui popup example: https://ratatui.rs/examples/apps/popup/
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

fn build_help_text(config: &Config) -> String {
    let kb = &config.key_bindings;
    let mut text = String::new();

    text.push_str("Tasks:\n");
    text.push_str(&format!(
        "  {}: Add a new task\n",
        format_key_binding_for_display(&kb.new)
    ));
    text.push_str(&format!(
        "  {} or Enter: Complete selected task (earns points!)\n",
        format_key_binding_for_display(&kb.toggle_done)
    ));
    text.push_str(&format!(
        "  {}: Delete selected task\n",
        format_key_binding_for_display(&kb.delete)
    ));
    text.push_str(&format!(
        "  {} / {}: Move selection up/down\n",
        format_key_binding_for_display(&kb.list_up),
        format_key_binding_for_display(&kb.list_down)
    ));
    text.push('\n');

    text.push_str("While adding a task:\n");
    text.push_str("  Tab: Cycle priority (high 20pts / medium 15pts / low 10pts)\n");
    text.push_str("  Enter: Save task\n");
    text.push_str("  Esc: Cancel\n");
    text.push('\n');

    text.push_str("General:\n");
    text.push_str(&format!(
        "  {}: Quit\n",
        format_key_binding_for_display(&kb.quit)
    ));
    text.push_str(&format!(
        "  {}: Show/hide help\n",
        format_key_binding_for_display(&kb.help)
    ));
    text.push('\n');

    text.push_str("Completing a task awards points by priority and shows a\n");
    text.push_str("celebration sticker for a couple of seconds. Nothing is\n");
    text.push_str("saved between sessions; the board lives in memory only.\n");

    text
}
