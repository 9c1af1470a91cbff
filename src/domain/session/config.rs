//! Session configuration value object

use std::path::PathBuf;
use std::time::Duration;

/// Default session length in minutes
pub const DEFAULT_MINUTES: u64 = 15;

/// Default interval between spoken nudges, in seconds
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Default transcription language tag
pub const DEFAULT_LANG: &str = "en-US";

/// Immutable configuration for one session run.
///
/// Built once by the CLI layer before the loop starts; the loop only
/// reads it.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Total session length in minutes (clamped to at least 1)
    pub minutes: u64,
    /// Seconds between interval prompts
    pub interval_secs: u64,
    /// Language tag passed to the transcription backend
    pub lang: String,
    /// Whether spoken feedback is produced
    pub use_voice: bool,
    /// TTS voice name, if any
    pub voice_name: Option<String>,
    /// TTS speech rate in words per minute, if any
    pub rate: Option<u32>,
    /// Whether input is captured by voice when an engine is available
    pub use_voice_input: bool,
    /// Default path for `/save` without an argument
    pub save_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Total session length as a duration.
    pub fn total(&self) -> Duration {
        Duration::from_secs(self.minutes.max(1) * 60)
    }

    /// Interval between nudges as a duration.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_MINUTES,
            interval_secs: DEFAULT_INTERVAL_SECS,
            lang: DEFAULT_LANG.to_string(),
            use_voice: true,
            voice_name: None,
            rate: None,
            use_voice_input: false,
            save_path: None,
        }
    }
}
