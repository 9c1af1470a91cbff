//! Simulated speech adapter
//!
//! Reports success without touching audio hardware, recording what would
//! have been spoken. This is the injected testing seam; nothing reads
//! environment variables to decide on simulation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{Speech, SpeechError};

/// Speech adapter that records utterances instead of producing audio
#[derive(Clone, Default)]
pub struct SimulatedSpeech {
    spoken: Arc<Mutex<Vec<String>>>,
}

impl SimulatedSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything spoken so far, in order.
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

#[async_trait]
impl Speech for SimulatedSpeech {
    async fn speak(&self, text: &str) -> Result<bool, SpeechError> {
        if text.is_empty() {
            return Ok(false);
        }
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(true)
    }
}
