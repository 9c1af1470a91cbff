//! Speech infrastructure adapters

mod noop;
mod say;
mod simulated;

pub use noop::NoOpSpeech;
pub use say::SayCommandSpeech;
pub use simulated::SimulatedSpeech;

use crate::application::ports::Speech;

/// Create a speech adapter for the given settings.
///
/// Disabled output gets the no-op adapter; simulation (tests, `--simulate`)
/// gets the recording adapter; otherwise the platform TTS command.
pub fn create_speech(
    enabled: bool,
    simulate: bool,
    voice: Option<String>,
    rate: Option<u32>,
) -> Box<dyn Speech> {
    if !enabled {
        Box::new(NoOpSpeech::new())
    } else if simulate {
        Box::new(SimulatedSpeech::new())
    } else {
        Box::new(SayCommandSpeech::new(voice, rate))
    }
}
