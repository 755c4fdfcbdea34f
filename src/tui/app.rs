use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::tui::widgets::input::Input;
use crate::{Board, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the task list.
    View,
    /// Typing a new task into the draft input.
    Insert,
    /// Key binding overlay.
    Help,
}

#[derive(Debug, Clone)]
pub struct StatusState {
    pub message: Option<String>,
    pub message_time: Option<Instant>,
}

impl Default for StatusState {
    fn default() -> Self {
        Self {
            message: None,
            message_time: None,
        }
    }
}

pub struct App {
    pub config: Config,
    pub board: Board,

    pub mode: Mode,
    pub selected_index: usize,
    pub list_state: ListState,
    /// Draft task text being typed. The selected priority lives on the board.
    pub draft: Input,
    /// Task awaiting delete confirmation, if any.
    pub pending_delete: Option<u64>,
    /// 0 = Delete, 1 = Cancel
    pub delete_modal_selection: usize,
    pub status: StatusState,
}

impl App {
    pub fn new(config: Config, seed_demo: bool) -> Self {
        let mut board = Board::new();
        board.set_celebration_lifetime(Duration::from_millis(config.celebration_ms));
        if seed_demo {
            board.seed_demo();
        }

        let mut app = Self {
            config,
            board,
            mode: Mode::View,
            selected_index: 0,
            list_state: ListState::default(),
            draft: Input::new(),
            pending_delete: None,
            delete_modal_selection: 0,
            status: StatusState::default(),
        };
        app.sync_list_state();
        app
    }

    /// Sync ListState with selected_index for proper scrolling
    pub fn sync_list_state(&mut self) {
        if self.board.tasks().is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Clamp the selection after the list shrinks (delete, fresh start).
    pub fn adjust_selected_index(&mut self) {
        let len = self.board.tasks().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
        self.sync_list_state();
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.sync_list_state();
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.board.tasks().len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
            self.sync_list_state();
        }
    }

    pub fn selected_task_id(&self) -> Option<u64> {
        self.board.tasks().get(self.selected_index).map(|t| t.id)
    }

    pub fn enter_insert_mode(&mut self) {
        self.mode = Mode::Insert;
    }

    pub fn exit_insert_mode(&mut self) {
        self.draft.clear();
        self.mode = Mode::View;
    }

    /// Submit the draft as a new task. Blank drafts are silently dropped,
    /// matching the board's add semantics; the input keeps focus either way.
    pub fn submit_draft(&mut self) {
        let priority = self.board.draft_priority();
        if self.board.add_task(self.draft.value(), priority).is_some() {
            self.draft.clear();
            self.adjust_selected_index();
            self.set_status_message("Task added".to_string());
        }
    }

    /// Toggle the selected task complete and surface the payout.
    pub fn toggle_selected(&mut self, now: Instant) {
        if let Some(id) = self.selected_task_id() {
            if let Some(earned) = self.board.toggle_complete(id, now) {
                self.set_status_message(format!("+{} points!", earned));
            }
        }
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.pending_delete = Some(id);
            self.delete_modal_selection = 0;
        } else {
            self.set_status_message("No task selected".to_string());
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            if self.board.delete_task(id) {
                self.adjust_selected_index();
                self.set_status_message("Task deleted".to_string());
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn enter_help_mode(&mut self) {
        self.mode = Mode::Help;
    }

    pub fn exit_help_mode(&mut self) {
        self.mode = Mode::View;
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status.message = Some(message);
        self.status.message_time = Some(Instant::now());
    }

    pub fn clear_status_message(&mut self) {
        self.status.message = None;
        self.status.message_time = None;
    }

    /// Check if status message should be auto-cleared (after 3 seconds)
    pub fn check_status_message_timeout(&mut self) {
        const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 3;
        if let Some(time) = self.status.message_time {
            if time.elapsed().as_secs() >= STATUS_MESSAGE_TIMEOUT_SECS {
                self.clear_status_message();
            }
        }
    }
}
