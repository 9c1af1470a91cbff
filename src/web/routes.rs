//! Dev-server router

use axum::routing::post;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the HTTP router: JSON API routes plus static file serving from
/// the state's root directory.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.root.clone());

    Router::new()
        .route("/api/git/status", post(handlers::git_status))
        .route("/api/git/add", post(handlers::git_add))
        .route("/api/git/commit", post(handlers::git_commit))
        .route("/api/git/push", post(handlers::git_push))
        .route("/api/handle_url", post(handlers::handle_url))
        .route("/api/file/ensure_html", post(handlers::ensure_html))
        .route("/api/open", post(handlers::open_target))
        .route("/api/*rest", post(handlers::unknown_route))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
