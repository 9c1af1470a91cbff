//! Simulated audio cue adapter

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{AudioCue, AudioCueError, AudioCueType};

/// Records cues instead of playing them; always reports success
#[derive(Clone, Default)]
pub struct SimulatedAudioCue {
    played: Arc<Mutex<Vec<AudioCueType>>>,
}

impl SimulatedAudioCue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<AudioCueType> {
        self.played.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioCue for SimulatedAudioCue {
    async fn play(&self, cue_type: AudioCueType) -> Result<bool, AudioCueError> {
        self.played.lock().unwrap().push(cue_type);
        Ok(true)
    }
}
