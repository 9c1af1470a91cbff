//! Prompt template rendering

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ModeParseError;

/// Prompt template modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptMode {
    #[default]
    Chat,
    Diary,
    Music,
    Image,
}

impl FromStr for PromptMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chat" => Ok(PromptMode::Chat),
            "diary" => Ok(PromptMode::Diary),
            "music" => Ok(PromptMode::Music),
            "image" => Ok(PromptMode::Image),
            _ => Err(ModeParseError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for PromptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PromptMode::Chat => "chat",
            PromptMode::Diary => "diary",
            PromptMode::Music => "music",
            PromptMode::Image => "image",
        };
        write!(f, "{}", name)
    }
}

/// Structured input for a prompt template.
///
/// All fields are optional; each mode reads the ones it cares about and
/// falls back to `seed` (and then a mode default) for the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptPayload {
    pub seed: Option<String>,
    pub lines: Vec<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub genre: Option<String>,
    pub bpm: Option<u32>,
    pub mood: Option<String>,
    pub subject: Option<String>,
    pub style: Option<String>,
}

impl PromptPayload {
    /// Payload carrying only a seed text.
    pub fn seeded(seed: impl Into<String>) -> Self {
        Self {
            seed: Some(seed.into()),
            ..Default::default()
        }
    }

    fn seed(&self) -> &str {
        self.seed.as_deref().map(str::trim).unwrap_or("")
    }

    fn field_or<'a>(field: &'a Option<String>, fallback: &'a str) -> &'a str {
        match field.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => fallback,
        }
    }
}

/// Render a prompt text block for the given mode.
///
/// Pure function: same inputs, same output, no side effects.
pub fn build_prompt(mode: PromptMode, payload: &PromptPayload) -> String {
    match mode {
        PromptMode::Chat => {
            if payload.lines.is_empty() {
                payload.seed().to_string()
            } else {
                payload
                    .lines
                    .iter()
                    .map(|l| l.trim())
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        PromptMode::Diary => {
            let title = PromptPayload::field_or(&payload.title, "Untitled");
            let body = PromptPayload::field_or(&payload.body, payload.seed());
            format!("[Diary]\nTitle: {}\n{}", title, body)
                .trim()
                .to_string()
        }
        PromptMode::Music => {
            let genre = PromptPayload::field_or(&payload.genre, "ambient");
            let bpm_part = payload
                .bpm
                .map(|bpm| format!(" @ {} BPM", bpm))
                .unwrap_or_default();
            let mood = match PromptPayload::field_or(&payload.mood, payload.seed()) {
                "" => "calm",
                m => m,
            };
            format!("Music: {}{}\nMood: {}", genre, bpm_part, mood)
                .trim()
                .to_string()
        }
        PromptMode::Image => {
            let subject = match PromptPayload::field_or(&payload.subject, payload.seed()) {
                "" => "a scene",
                s => s,
            };
            let style = PromptPayload::field_or(&payload.style, "photorealistic");
            format!("Image: {}\nStyle: {}", subject, style)
                .trim()
                .to_string()
        }
    }
}
