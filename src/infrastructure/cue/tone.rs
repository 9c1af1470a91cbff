//! Synthesized tone cue adapter
//!
//! Platforms without system sounds get a short rodio sine chime; when no
//! audio output device exists the adapter degrades to a terminal bell.

use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use crate::application::ports::{AudioCue, AudioCueError, AudioCueType};

/// Audio cue adapter using synthesized tones
pub struct ToneAudioCue;

impl ToneAudioCue {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ToneAudioCue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioCue for ToneAudioCue {
    async fn play(&self, cue_type: AudioCueType) -> Result<bool, AudioCueError> {
        // Audio playback runs in a blocking thread to keep the runtime free
        tokio::task::spawn_blocking(move || match play_tone_sync(cue_type) {
            Ok(()) => Ok(true),
            // No output device: minimal terminal cue instead
            Err(AudioCueError::DeviceNotAvailable(_)) => Ok(terminal_bell()),
            Err(e) => Err(e),
        })
        .await
        .map_err(|e| AudioCueError::PlaybackFailed(format!("Task join error: {}", e)))?
    }
}

/// Emit the terminal bell character. Returns whether the write succeeded.
fn terminal_bell() -> bool {
    let mut out = std::io::stdout();
    out.write_all(b"\x07").and_then(|_| out.flush()).is_ok()
}

/// Short tone with a fade-in for a smoother sound
fn gentle_tone(freq: f32, duration_ms: u64, amplitude: f32) -> impl Source<Item = f32> + Send {
    let fade_ms = (duration_ms / 5).min(30);
    SineWave::new(freq)
        .take_duration(Duration::from_millis(duration_ms))
        .fade_in(Duration::from_millis(fade_ms))
        .amplify(amplitude)
}

fn play_tone_sync(cue_type: AudioCueType) -> Result<(), AudioCueError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| AudioCueError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| AudioCueError::PlaybackFailed(e.to_string()))?;

    const AMP: f32 = 0.3;

    match cue_type {
        AudioCueType::SessionStart => {
            // Ascending: C5 -> E5
            sink.append(gentle_tone(523.0, 80, AMP));
            sink.append(gentle_tone(659.0, 120, AMP));
        }
        AudioCueType::IntervalPrompt => {
            // Single soft E5 tap
            sink.append(gentle_tone(659.0, 100, AMP * 0.8));
        }
        AudioCueType::SessionEnd => {
            // Descending: E5 -> C5
            sink.append(gentle_tone(659.0, 80, AMP));
            sink.append(gentle_tone(523.0, 150, AMP));
        }
    }

    sink.sleep_until_end();

    Ok(())
}
