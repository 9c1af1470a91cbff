//! Dev-server JSON handlers

use std::path::{Path, PathBuf};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::git;
use super::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GitStatusResponse {
    pub cwd: String,
    pub branch: String,
    pub status: String,
    pub remote: String,
}

#[derive(Debug, Deserialize)]
pub struct GitAddRequest {
    #[serde(default)]
    pub paths: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GitAddResponse {
    pub added: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GitCommitRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GitOutputResponse {
    pub output: String,
}

#[derive(Debug, Deserialize)]
pub struct GitPushRequest {
    pub remote: Option<String>,
    pub branch: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GitPushResponse {
    pub output: String,
    pub remote: String,
    pub branch: String,
}

#[derive(Debug, Deserialize)]
pub struct HandleUrlRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HandleUrlResponse {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EnsureHtmlRequest {
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnsureHtmlResponse {
    pub created: bool,
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenRequest {
    pub target: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OpenResponse {
    pub opened: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/git/status
pub async fn git_status(State(state): State<AppState>) -> impl IntoResponse {
    let root = &state.root;
    Json(GitStatusResponse {
        cwd: root.to_string_lossy().into_owned(),
        branch: git::current_branch(root).await,
        status: git::run_capture(&["status", "--porcelain=v1", "-b"], root).await,
        remote: git::run_capture(&["remote", "-v"], root).await,
    })
}

/// POST /api/git/add
///
/// Stages existing paths under the served root; anything outside it or
/// missing is silently skipped.
pub async fn git_add(
    State(state): State<AppState>,
    Json(req): Json<GitAddRequest>,
) -> impl IntoResponse {
    let mut added = Vec::new();

    for raw in req.paths.iter().filter(|p| !p.is_empty()) {
        let Some(path) = resolve_under_root(&state.root, raw) else {
            continue;
        };
        git::run_capture(&["add", &path.to_string_lossy()], &state.root).await;
        if let Ok(rel) = path.strip_prefix(canonical_root(&state.root)) {
            added.push(rel.to_string_lossy().into_owned());
        }
    }

    info!("staged {} path(s)", added.len());
    Json(GitAddResponse { added })
}

/// POST /api/git/commit
pub async fn git_commit(
    State(state): State<AppState>,
    Json(req): Json<GitCommitRequest>,
) -> impl IntoResponse {
    let message = req
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or("chore: update");

    let output = git::run_capture(&["commit", "-m", message], &state.root).await;
    Json(GitOutputResponse { output })
}

/// POST /api/git/push
pub async fn git_push(
    State(state): State<AppState>,
    Json(req): Json<GitPushRequest>,
) -> impl IntoResponse {
    let remote = req
        .remote
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or("origin")
        .to_string();

    let branch = match req.branch.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
        Some(b) => b.to_string(),
        None => {
            let current = git::current_branch(&state.root).await;
            if current.is_empty() {
                "main".to_string()
            } else {
                current
            }
        }
    };

    let output = git::run_capture(&["push", "-u", &remote, &branch], &state.root).await;
    Json(GitPushResponse {
        output,
        remote,
        branch,
    })
}

/// POST /api/handle_url
///
/// Local paths get staged; anything else is returned as an external URL
/// for the caller to handle.
pub async fn handle_url(
    State(state): State<AppState>,
    Json(req): Json<HandleUrlRequest>,
) -> impl IntoResponse {
    let url = req.url.unwrap_or_default().trim().to_string();

    if let Some(path) = resolve_under_root(&state.root, &url) {
        git::run_capture(&["add", &path.to_string_lossy()], &state.root).await;
        return Json(HandleUrlResponse {
            action: "staged".to_string(),
            path: Some(path.to_string_lossy().into_owned()),
            url: None,
        });
    }

    if url.is_empty() {
        return Json(HandleUrlResponse {
            action: "noop".to_string(),
            path: None,
            url: None,
        });
    }

    Json(HandleUrlResponse {
        action: "external".to_string(),
        path: None,
        url: Some(url),
    })
}

/// POST /api/file/ensure_html
///
/// Creates a minimal HTML file at the given path (under the root) when it
/// doesn't already exist.
pub async fn ensure_html(
    State(state): State<AppState>,
    Json(req): Json<EnsureHtmlRequest>,
) -> impl IntoResponse {
    let Some(raw) = req.path.as_deref().map(str::trim).filter(|p| !p.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "missing path".to_string(),
            }),
        )
            .into_response();
    };

    let Some(path) = resolve_new_under_root(&state.root, raw) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "path escapes served root".to_string(),
            }),
        )
            .into_response();
    };

    if path.exists() {
        return Json(EnsureHtmlResponse {
            created: false,
            path: path.to_string_lossy().into_owned(),
        })
        .into_response();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string());
    let body = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n</body>\n</html>\n",
        stem
    );

    match tokio::fs::write(&path, body).await {
        Ok(()) => Json(EnsureHtmlResponse {
            created: true,
            path: path.to_string_lossy().into_owned(),
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// POST /api/open
///
/// Opens a path or URL with the platform opener, best-effort.
pub async fn open_target(Json(req): Json<OpenRequest>) -> impl IntoResponse {
    let target = req.target.unwrap_or_default().trim().to_string();
    if target.is_empty() {
        return Json(OpenResponse { opened: false });
    }

    Json(OpenResponse {
        opened: super::open_in_browser(&target).await,
    })
}

/// 404 for unknown /api routes
pub async fn unknown_route() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "unknown route".to_string(),
        }),
    )
}

// ============================================================================
// Path containment
// ============================================================================

fn canonical_root(root: &Path) -> PathBuf {
    root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
}

/// Resolve an existing path (or file:// URL) and require it to sit under
/// the served root. Returns None for anything missing or outside.
fn resolve_under_root(root: &Path, raw: &str) -> Option<PathBuf> {
    let raw = raw.strip_prefix("file://").unwrap_or(raw);
    if raw.is_empty() {
        return None;
    }

    let candidate = Path::new(raw);
    let absolute = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    };

    let canonical = absolute.canonicalize().ok()?;
    canonical
        .starts_with(canonical_root(root))
        .then_some(canonical)
}

/// Like `resolve_under_root` but for a path that may not exist yet: the
/// parent directory must exist and sit under the root.
fn resolve_new_under_root(root: &Path, raw: &str) -> Option<PathBuf> {
    let raw = raw.strip_prefix("file://").unwrap_or(raw);
    let candidate = Path::new(raw);
    let absolute = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    };

    let parent = absolute.parent()?.canonicalize().ok()?;
    if !parent.starts_with(canonical_root(root)) {
        return None;
    }

    Some(parent.join(absolute.file_name()?))
}
