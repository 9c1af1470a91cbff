//! No-op speech adapter
//!
//! Used when spoken feedback is disabled.

use async_trait::async_trait;

use crate::application::ports::{Speech, SpeechError};

/// No-op speech adapter that reports nothing was spoken
pub struct NoOpSpeech;

impl NoOpSpeech {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpSpeech {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Speech for NoOpSpeech {
    async fn speak(&self, _text: &str) -> Result<bool, SpeechError> {
        Ok(false)
    }
}
