//! Shared state for dev-server handlers

use std::path::PathBuf;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Directory being served; git operations are confined to it
    pub root: PathBuf,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}
