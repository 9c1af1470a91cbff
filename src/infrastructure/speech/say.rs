//! macOS `say` speech adapter
//!
//! Shells out to the system TTS command. All failures (missing binary,
//! spawn error, nonzero exit) are reported as a no-op so spoken feedback
//! can never interrupt the session.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Speech, SpeechError};

/// Speech adapter backed by the `say` command
pub struct SayCommandSpeech {
    voice: Option<String>,
    rate: Option<u32>,
}

impl SayCommandSpeech {
    pub fn new(voice: Option<String>, rate: Option<u32>) -> Self {
        Self { voice, rate }
    }
}

#[async_trait]
impl Speech for SayCommandSpeech {
    async fn speak(&self, text: &str) -> Result<bool, SpeechError> {
        if text.is_empty() {
            return Ok(false);
        }

        let mut cmd = Command::new("say");
        if let Some(ref voice) = self.voice {
            cmd.args(["-v", voice]);
        }
        if let Some(rate) = self.rate {
            cmd.args(["-r", &rate.to_string()]);
        }
        cmd.arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        match cmd.status().await {
            Ok(status) => Ok(status.success()),
            // Missing binary (non-macOS, stripped-down install): no-op
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SpeechError::SynthesisFailed(e.to_string())),
        }
    }
}
