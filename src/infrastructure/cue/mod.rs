//! Audio cue infrastructure adapters

mod afplay;
mod noop;
mod simulated;
mod tone;

pub use afplay::AfplayAudioCue;
pub use noop::NoOpAudioCue;
pub use simulated::SimulatedAudioCue;
pub use tone::ToneAudioCue;

use crate::application::ports::AudioCue;

/// Create an audio cue adapter for the current platform and settings.
pub fn create_audio_cue(enabled: bool, simulate: bool) -> Box<dyn AudioCue> {
    if !enabled {
        return Box::new(NoOpAudioCue::new());
    }
    if simulate {
        return Box::new(SimulatedAudioCue::new());
    }

    #[cfg(target_os = "macos")]
    {
        Box::new(AfplayAudioCue::default())
    }
    #[cfg(not(target_os = "macos"))]
    {
        Box::new(ToneAudioCue::new())
    }
}
