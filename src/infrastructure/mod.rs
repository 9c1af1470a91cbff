//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems: the platform TTS and sound
//! commands, the microphone, the recognition backend, the terminal,
//! and the config file.

pub mod config;
pub mod cue;
pub mod input;
pub mod speech;
pub mod voice;

// Re-export adapters
pub use config::XdgConfigStore;
pub use cue::{create_audio_cue, AfplayAudioCue, NoOpAudioCue, SimulatedAudioCue, ToneAudioCue};
pub use input::StdinLineInput;
pub use speech::{create_speech, NoOpSpeech, SayCommandSpeech, SimulatedSpeech};
pub use voice::{create_voice_input, GoogleVoiceInput, SimulatedVoiceInput};
