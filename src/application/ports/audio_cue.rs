//! Audio cue port for short sound feedback
//!
//! Provides audible feedback at session start, interval prompts, and
//! session end.

use async_trait::async_trait;
use thiserror::Error;

/// Types of audio cues that can be played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCueType {
    /// Chime when the session opens
    SessionStart,
    /// Gentle chime at each interval prompt (also on /skip)
    IntervalPrompt,
    /// Closing chime when the session ends
    SessionEnd,
}

/// Errors that can occur during audio cue playback
#[derive(Error, Debug)]
pub enum AudioCueError {
    /// Failed to play the audio cue
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),
}

/// Port trait for audio cue playback
///
/// `Ok(true)` means a cue was produced (or simulated); `Ok(false)` means
/// the adapter is a deliberate no-op.
#[async_trait]
pub trait AudioCue: Send + Sync {
    async fn play(&self, cue_type: AudioCueType) -> Result<bool, AudioCueError>;
}

#[async_trait]
impl<T: AudioCue + ?Sized> AudioCue for Box<T> {
    async fn play(&self, cue_type: AudioCueType) -> Result<bool, AudioCueError> {
        (**self).play(cue_type).await
    }
}
