pub mod celebration;
pub mod color;
pub mod confirm_delete;
pub mod help;
pub mod input;
pub mod points_panel;
pub mod status_bar;
pub mod task_input;
pub mod task_list;
