//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod command;
pub mod config;
pub mod error;
pub mod prompt;
pub mod session;

// Re-export common types
pub use command::{parse_command, Command, CommandName};
pub use config::AppConfig;
pub use error::*;
pub use prompt::{build_prompt, PromptMode, PromptPayload};
pub use session::{IntervalTimer, SessionConfig, Transcript};
