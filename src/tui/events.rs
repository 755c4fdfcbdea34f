use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    size as terminal_size,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::tui::app::{App, Mode};
use crate::tui::error::TuiError;
use crate::tui::layout::Layout;
use crate::utils::parse_key_binding;

/// Guard that ensures terminal state is restored even on panic
/// This is critical for TUI applications - if the terminal is left in raw mode
/// or alternate screen, the user's terminal will be unusable.
struct TerminalGuard {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl TerminalGuard {
    fn new() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        Ok(Self {
            raw_mode_enabled: true,
            alternate_screen_enabled: true,
        })
    }

    /// Manually restore terminal state (called on normal exit)
    /// After calling this, the guard will do nothing on drop
    fn restore(&mut self) -> Result<(), TuiError> {
        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }
        if self.alternate_screen_enabled {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.alternate_screen_enabled = false;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Ignore errors in drop - we're already in a cleanup path
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
        }
        if self.alternate_screen_enabled {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}

pub fn run_event_loop(mut app: App) -> Result<(), TuiError> {
    // Check terminal size before entering alternate screen so the error
    // message lands in the normal terminal
    let (width, height) = terminal_size().map_err(TuiError::IoError)?;

    let min_width_with_border = Layout::MIN_WIDTH + 2;
    let min_height_with_border = Layout::MIN_HEIGHT + 2;

    if width < min_width_with_border || height < min_height_with_border {
        return Err(TuiError::RenderError(format!(
            "Terminal size too small. Current: {}x{}, Minimum required: {}x{}. Please resize your terminal window.",
            width, height, min_width_with_border, min_height_with_border
        )));
    }

    // Setup terminal with guard to ensure restoration on panic
    let mut guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        app.check_status_message_timeout();
        // Celebration expiry is a value check against now, re-evaluated each
        // pass; a deadline that already passed while a newer celebration is
        // up clears nothing.
        app.board.tick(Instant::now());

        terminal.draw(|f| {
            let layout = Layout::calculate(f.area());
            crate::tui::render::render(f, &mut app, &layout);
        })?;

        // Handle events - only process Press events to avoid duplicate
        // processing on Windows
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key_event) => {
                    if key_event.kind == KeyEventKind::Press {
                        if handle_key_event(&mut app, key_event) {
                            break; // Quit requested
                        }
                    }
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated from f.area() on the next draw
                }
                _ => {}
            }
        }
    }

    guard.restore()?;

    Ok(())
}

/// True when the key event matches the configured binding string.
/// Unparseable bindings never match; the defaults always parse.
fn matches_binding(binding: &str, key_event: &KeyEvent) -> bool {
    match parse_key_binding(binding) {
        Ok(parsed) => {
            parsed.key_code == key_event.code
                && parsed.requires_ctrl == key_event.modifiers.contains(KeyModifiers::CONTROL)
        }
        Err(e) => {
            log::warn!("ignoring bad key binding {:?}: {}", binding, e);
            false
        }
    }
}

/// Dispatch a key press. Returns true when the app should quit.
fn handle_key_event(app: &mut App, key_event: KeyEvent) -> bool {
    // The delete confirmation modal captures all input while open
    if app.pending_delete.is_some() {
        handle_delete_confirmation_modal(app, key_event);
        return false;
    }

    match app.mode {
        Mode::Help => handle_help_mode(app, key_event),
        Mode::Insert => handle_insert_mode(app, key_event),
        Mode::View => return handle_view_mode(app, key_event),
    }
    false
}

fn handle_delete_confirmation_modal(app: &mut App, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Up | KeyCode::Down => {
            // Two options: Delete, Cancel
            app.delete_modal_selection = 1 - app.delete_modal_selection;
        }
        KeyCode::Enter => {
            if app.delete_modal_selection == 0 {
                app.confirm_delete();
            } else {
                app.cancel_delete();
            }
        }
        KeyCode::Esc => {
            app.cancel_delete();
        }
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key_event: KeyEvent) {
    if key_event.code == KeyCode::Esc || matches_binding(&app.config.key_bindings.help, &key_event)
    {
        app.exit_help_mode();
    }
}

fn handle_insert_mode(app: &mut App, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Esc => app.exit_insert_mode(),
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Tab => app.board.cycle_draft_priority(),
        KeyCode::Backspace => app.draft.backspace(),
        KeyCode::Delete => app.draft.delete(),
        KeyCode::Left => app.draft.move_left(),
        KeyCode::Right => app.draft.move_right(),
        KeyCode::Home => app.draft.move_home(),
        KeyCode::End => app.draft.move_end(),
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.draft.insert_char(c);
        }
        _ => {}
    }
}

fn handle_view_mode(app: &mut App, key_event: KeyEvent) -> bool {
    let bindings = app.config.key_bindings.clone();

    if matches_binding(&bindings.quit, &key_event) {
        return true;
    }

    if matches_binding(&bindings.new, &key_event) {
        app.enter_insert_mode();
    } else if matches_binding(&bindings.help, &key_event) {
        app.enter_help_mode();
    } else if matches_binding(&bindings.delete, &key_event) {
        app.request_delete_selected();
    } else if matches_binding(&bindings.toggle_done, &key_event)
        || key_event.code == KeyCode::Enter
    {
        app.toggle_selected(Instant::now());
    } else if matches_binding(&bindings.list_up, &key_event) || key_event.code == KeyCode::Up {
        app.move_selection_up();
    } else if matches_binding(&bindings.list_down, &key_event) || key_event.code == KeyCode::Down {
        app.move_selection_down();
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::models::Priority;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_binding_quits_from_view_mode() {
        let mut app = App::new(Config::default(), false);
        assert!(handle_key_event(&mut app, key(KeyCode::Char('q'))));
    }

    #[test]
    fn typing_a_task_and_submitting_it() {
        let mut app = App::new(Config::default(), false);
        handle_key_event(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::Insert);

        // 'q' must type into the draft, not quit
        for c in "quick task".chars() {
            assert!(!handle_key_event(&mut app, key(KeyCode::Char(c))));
        }
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.board.tasks().len(), 1);
        assert_eq!(app.board.tasks()[0].text, "quick task");
    }

    #[test]
    fn tab_cycles_draft_priority_in_insert_mode() {
        let mut app = App::new(Config::default(), false);
        handle_key_event(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.board.draft_priority(), Priority::Medium);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.board.draft_priority(), Priority::Low);
    }

    #[test]
    fn space_toggles_the_selected_task() {
        let mut app = App::new(Config::default(), false);
        app.board.add_task("task", Priority::High);
        app.sync_list_state();
        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.board.points(), 20);
        assert!(app.board.tasks()[0].completed);
    }

    #[test]
    fn delete_flow_requires_confirmation() {
        let mut app = App::new(Config::default(), false);
        app.board.add_task("task", Priority::Low);
        app.sync_list_state();

        handle_key_event(&mut app, key(KeyCode::Char('d')));
        assert!(app.pending_delete.is_some());

        // While the modal is open, 'q' must not quit
        assert!(!handle_key_event(&mut app, key(KeyCode::Char('q'))));

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.board.tasks().is_empty());
    }

    #[test]
    fn esc_cancels_the_delete_modal() {
        let mut app = App::new(Config::default(), false);
        app.board.add_task("task", Priority::Low);
        app.sync_list_state();
        handle_key_event(&mut app, key(KeyCode::Char('d')));
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.pending_delete.is_none());
        assert_eq!(app.board.tasks().len(), 1);
    }

    #[test]
    fn unparseable_binding_never_matches() {
        assert!(!matches_binding("NotAKey", &key(KeyCode::Char('n'))));
    }
}
