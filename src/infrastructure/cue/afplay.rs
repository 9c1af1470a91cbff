//! macOS `afplay` system-sound cue adapter

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioCue, AudioCueError, AudioCueType};

/// Fallback system sound when the preferred one is missing
const DEFAULT_SOUND: &str = "Glass";

/// Audio cue adapter playing macOS system sounds via `afplay`
pub struct AfplayAudioCue {
    sound: String,
}

impl AfplayAudioCue {
    pub fn new(sound: impl Into<String>) -> Self {
        Self {
            sound: sound.into(),
        }
    }

    fn sound_path(&self, cue_type: AudioCueType) -> String {
        // A softer sound for the closing cue, the configured one elsewhere
        let name = match cue_type {
            AudioCueType::SessionEnd => "Submarine",
            AudioCueType::SessionStart | AudioCueType::IntervalPrompt => self.sound.as_str(),
        };

        let path = format!("/System/Library/Sounds/{}.aiff", name);
        if Path::new(&path).exists() {
            path
        } else {
            format!("/System/Library/Sounds/{}.aiff", DEFAULT_SOUND)
        }
    }
}

impl Default for AfplayAudioCue {
    fn default() -> Self {
        Self::new(DEFAULT_SOUND)
    }
}

#[async_trait]
impl AudioCue for AfplayAudioCue {
    async fn play(&self, cue_type: AudioCueType) -> Result<bool, AudioCueError> {
        let path = self.sound_path(cue_type);

        match Command::new("afplay")
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
        {
            Ok(status) => Ok(status.success()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AudioCueError::PlaybackFailed(e.to_string())),
        }
    }
}
