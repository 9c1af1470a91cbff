//! Local static/dev HTTP server
//!
//! Serves the working directory and exposes a few git-staging convenience
//! endpoints used by the bundled HTML editors.

mod git;
mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tracing::info;

/// Default index page opened after the server starts
const DEFAULT_INDEX: &str = "/index.html";

/// Options for the dev server
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub port: u16,
    pub root: PathBuf,
    /// Path opened in the browser after binding; None keeps the default
    pub open_path: Option<String>,
    /// Skip the browser entirely (tests, headless machines)
    pub no_browser: bool,
}

/// Open a path or URL with the platform opener. Best-effort.
pub async fn open_in_browser(target: &str) -> bool {
    #[cfg(target_os = "macos")]
    const OPENER: &str = "open";
    #[cfg(not(target_os = "macos"))]
    const OPENER: &str = "xdg-open";

    tokio::process::Command::new(OPENER)
        .arg(target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run the dev server until interrupted.
pub async fn serve(options: ServeOptions) -> std::io::Result<()> {
    let state = AppState::new(options.root.clone());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", options.port)).await?;
    let addr = listener.local_addr()?;

    let index = options
        .open_path
        .clone()
        .unwrap_or_else(|| DEFAULT_INDEX.to_string());
    let url = format!("http://localhost:{}{}", addr.port(), index);
    info!("Serving {} at {}", options.root.display(), url);

    if !options.no_browser {
        // One-shot delayed open so the listener is up first
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            open_in_browser(&url).await;
        });
    }

    axum::serve(listener, router).await
}
