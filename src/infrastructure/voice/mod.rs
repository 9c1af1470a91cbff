//! Voice input infrastructure adapters

pub mod capture;
pub mod flac;
mod google;
mod simulated;

pub use google::GoogleVoiceInput;
pub use simulated::SimulatedVoiceInput;

use crate::application::ports::VoiceInput;

/// Create a voice-input adapter: simulated utterances when requested,
/// otherwise microphone capture + the Google recognition backend.
pub fn create_voice_input(simulate: Option<Vec<String>>) -> Box<dyn VoiceInput> {
    match simulate {
        Some(utterances) => Box::new(SimulatedVoiceInput::new(utterances)),
        None => Box::new(GoogleVoiceInput::new()),
    }
}
