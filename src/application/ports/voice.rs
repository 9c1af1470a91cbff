//! Voice input port interface

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Options for one capture-and-transcribe cycle
#[derive(Debug, Clone)]
pub struct ListenOptions {
    /// Language tag sent to the recognition backend (e.g. "en-US")
    pub lang: String,
    /// How long to wait for speech to start
    pub timeout: Duration,
    /// Maximum length of one captured phrase
    pub phrase_limit: Duration,
}

impl Default for ListenOptions {
    fn default() -> Self {
        Self {
            lang: "en-US".to_string(),
            timeout: Duration::from_secs(3),
            phrase_limit: Duration::from_secs(6),
        }
    }
}

/// Voice capture / recognition errors
#[derive(Debug, Clone, Error)]
pub enum VoiceError {
    #[error("No audio input device available")]
    NoInputDevice,

    #[error("Audio capture failed: {0}")]
    CaptureFailed(String),

    #[error("Audio encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Recognition request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse recognition response: {0}")]
    ParseError(String),
}

/// Port for one-shot voice capture and transcription
///
/// Callers check `is_available` before relying on voice input and degrade
/// to text input otherwise. `listen_once` failures are treated as an empty
/// utterance by the session loop; emptiness is the failure signal the loop
/// acts on.
#[async_trait]
pub trait VoiceInput: Send + Sync {
    /// Whether voice capture can work in this environment.
    fn is_available(&self) -> bool;

    /// Capture one utterance and return its transcription.
    async fn listen_once(&self, opts: &ListenOptions) -> Result<String, VoiceError>;
}

#[async_trait]
impl<T: VoiceInput + ?Sized> VoiceInput for Box<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    async fn listen_once(&self, opts: &ListenOptions) -> Result<String, VoiceError> {
        (**self).listen_once(opts).await
    }
}
