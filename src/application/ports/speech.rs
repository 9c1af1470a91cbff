//! Speech output port for spoken feedback
//!
//! Spoken acknowledgments are best-effort: the session loop never fails
//! because a voice couldn't be produced.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during speech synthesis
#[derive(Error, Debug)]
pub enum SpeechError {
    /// The synthesis command failed to run
    #[error("Speech synthesis failed: {0}")]
    SynthesisFailed(String),
}

/// Port trait for text-to-speech output
///
/// Returns `Ok(true)` when speech was produced (or simulated), `Ok(false)`
/// for no-ops (empty text, disabled output, missing platform support).
#[async_trait]
pub trait Speech: Send + Sync {
    async fn speak(&self, text: &str) -> Result<bool, SpeechError>;
}

#[async_trait]
impl<T: Speech + ?Sized> Speech for Box<T> {
    async fn speak(&self, text: &str) -> Result<bool, SpeechError> {
        (**self).speak(text).await
    }
}
