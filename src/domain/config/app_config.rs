//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::session::{SessionConfig, DEFAULT_INTERVAL_SECS, DEFAULT_LANG, DEFAULT_MINUTES};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub minutes: Option<u64>,
    pub interval: Option<u64>,
    pub lang: Option<String>,
    pub voice: Option<bool>,
    pub voice_name: Option<String>,
    pub rate: Option<u32>,
    pub voice_input: Option<bool>,
    pub save_path: Option<String>,
}

impl AppConfig {
    /// Config with no values set (all fall through to defaults)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            minutes: Some(DEFAULT_MINUTES),
            interval: Some(DEFAULT_INTERVAL_SECS),
            lang: Some(DEFAULT_LANG.to_string()),
            voice: Some(true),
            voice_name: None,
            rate: None,
            voice_input: Some(false),
            save_path: None,
        }
    }

    /// Merge two configs; fields set in `self` win over `other`.
    pub fn merge(self, other: AppConfig) -> AppConfig {
        AppConfig {
            minutes: self.minutes.or(other.minutes),
            interval: self.interval.or(other.interval),
            lang: self.lang.or(other.lang),
            voice: self.voice.or(other.voice),
            voice_name: self.voice_name.or(other.voice_name),
            rate: self.rate.or(other.rate),
            voice_input: self.voice_input.or(other.voice_input),
            save_path: self.save_path.or(other.save_path),
        }
    }

    /// Resolve into a concrete session configuration, filling any unset
    /// field with its built-in default.
    pub fn into_session_config(self) -> SessionConfig {
        let base = SessionConfig::default();
        SessionConfig {
            minutes: self.minutes.unwrap_or(base.minutes),
            interval_secs: self.interval.unwrap_or(base.interval_secs),
            lang: self.lang.unwrap_or(base.lang),
            use_voice: self.voice.unwrap_or(base.use_voice),
            voice_name: self.voice_name,
            rate: self.rate,
            use_voice_input: self.voice_input.unwrap_or(base.use_voice_input),
            save_path: self.save_path.map(PathBuf::from),
        }
    }
}
