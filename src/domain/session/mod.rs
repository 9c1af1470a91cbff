//! Session domain module

mod config;
mod timer;
mod transcript;

pub use config::{SessionConfig, DEFAULT_INTERVAL_SECS, DEFAULT_LANG, DEFAULT_MINUTES};
pub use timer::IntervalTimer;
pub use transcript::Transcript;
