pub mod board;
pub mod cli;
pub mod config;
pub mod models;
pub mod rewards;
pub mod tui;
pub mod utils;

pub use board::Board;
pub use config::Config;
pub use models::{Priority, Task};
pub use utils::Profile;
