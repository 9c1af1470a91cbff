//! Simulated voice input adapter
//!
//! Returns a fixed utterance followed by `/done`, bypassing all audio
//! capture. This is the injected replacement for environment-variable
//! dry-run switches.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{ListenOptions, VoiceError, VoiceInput};

/// Voice input that replays scripted utterances verbatim
pub struct SimulatedVoiceInput {
    utterances: Mutex<Vec<String>>,
}

impl SimulatedVoiceInput {
    /// Replay `utterances` in order; once exhausted, every further listen
    /// yields `/done` so a session always terminates.
    pub fn new(utterances: Vec<String>) -> Self {
        let mut reversed = utterances;
        reversed.reverse();
        Self {
            utterances: Mutex::new(reversed),
        }
    }

    /// Single fixed utterance.
    pub fn fixed(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()])
    }
}

#[async_trait]
impl VoiceInput for SimulatedVoiceInput {
    fn is_available(&self) -> bool {
        true
    }

    async fn listen_once(&self, _opts: &ListenOptions) -> Result<String, VoiceError> {
        Ok(self
            .utterances
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| "/done".to_string()))
    }
}
