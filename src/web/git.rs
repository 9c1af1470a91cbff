//! Best-effort git subprocess helpers
//!
//! Output is captured with stderr folded in; failures become readable
//! text instead of HTTP errors, mirroring what a terminal user would see.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

/// Run a git subcommand in `cwd`, capturing combined output.
pub async fn run_capture(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await;

    match output {
        Ok(out) => {
            let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&out.stderr));
            text
        }
        Err(e) => format!("<error: {}>\n", e),
    }
}

/// Current branch name, or empty when not in a repository.
pub async fn current_branch(cwd: &Path) -> String {
    run_capture(&["rev-parse", "--abbrev-ref", "HEAD"], cwd)
        .await
        .trim()
        .to_string()
}
