//! API endpoints.

mod auth;
mod notices;

use axum::{Router, routing::get};

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .merge(auth::router())
        .nest("/notices", notices::router())
}

/// Liveness banner.
async fn home() -> &'static str {
    "NoticeBoard backend running"
}
