//! CLI layer - argument parsing, presentation, and application orchestration

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use app::{run, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, ServeArgs, SessionArgs};
pub use presenter::Presenter;
