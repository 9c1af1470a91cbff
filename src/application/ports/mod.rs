//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_cue;
pub mod config;
pub mod line_input;
pub mod speech;
pub mod voice;

// Re-export common types
pub use audio_cue::{AudioCue, AudioCueError, AudioCueType};
pub use config::ConfigStore;
pub use line_input::LineInput;
pub use speech::{Speech, SpeechError};
pub use voice::{ListenOptions, VoiceError, VoiceInput};
