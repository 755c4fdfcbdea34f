use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use crate::tui::app::{App, Mode};
use crate::tui::layout::Layout;
use crate::tui::widgets::{
    celebration::render_celebration, color::parse_color, confirm_delete::render_confirm_delete,
    help::render_help, points_panel::render_points_panel, status_bar::render_status_bar,
    task_input::render_task_input, task_list::render_task_list,
};
use crate::utils::format_key_binding_for_display;

pub fn render(f: &mut Frame, app: &mut App, layout: &Layout) {
    // Outer border with the app name centered in the top border
    let active_theme = app.config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title("kudos")
        .title_alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(fg_color).bg(bg_color));
    f.render_widget(outer_block, f.area());

    render_points_panel(f, layout.header_area, &app.board, &app.config);

    render_task_input(
        f,
        layout.input_area,
        &app.draft,
        app.board.draft_priority(),
        app.mode == Mode::Insert,
        &app.config,
    );

    render_task_list(
        f,
        layout.list_area,
        app.board.tasks(),
        &mut app.list_state,
        &app.config,
    );

    let key_hints = get_key_hints(app);
    render_status_bar(
        f,
        layout.status_area,
        app.status.message.as_ref(),
        &key_hints,
        &app.config,
    );

    // Overlays render last, on top of normal content
    if app.mode == Mode::Help {
        render_help(f, f.area(), &app.config);
    }

    if let Some(id) = app.pending_delete {
        let task_text = app
            .board
            .tasks()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.text.as_str())
            .unwrap_or("");
        render_confirm_delete(
            f,
            f.area(),
            task_text,
            app.delete_modal_selection,
            &app.config,
        );
    }

    // The event loop ticks the board before drawing, so an expired
    // celebration is never rendered
    if let Some(celebration) = app.board.celebration() {
        render_celebration(f, f.area(), celebration, &app.config);
    }
}

fn get_key_hints(app: &App) -> Vec<String> {
    let kb = &app.config.key_bindings;
    match app.mode {
        Mode::Help => {
            vec![format!(
                "Esc or {}: Exit help",
                format_key_binding_for_display(&kb.help)
            )]
        }
        Mode::Insert => {
            vec![
                "Enter: Save task".to_string(),
                "Tab: Cycle priority".to_string(),
                "Esc: Cancel".to_string(),
            ]
        }
        Mode::View => {
            vec![
                format!("{}: Quit", format_key_binding_for_display(&kb.quit)),
                format!("{}: Add task", format_key_binding_for_display(&kb.new)),
                format!(
                    "{}: Complete",
                    format_key_binding_for_display(&kb.toggle_done)
                ),
                format!("{}: Delete", format_key_binding_for_display(&kb.delete)),
                format!(
                    "{}/{}: Navigate",
                    format_key_binding_for_display(&kb.list_up),
                    format_key_binding_for_display(&kb.list_down)
                ),
                format!("{}: Help", format_key_binding_for_display(&kb.help)),
            ]
        }
    }
}
