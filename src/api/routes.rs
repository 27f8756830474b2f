//! API route configuration.
//!
//! These routes sit behind [`crate::api::middleware::auth`] when an API key
//! is configured.

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// Maximum accepted request body, in bytes.
pub const MAX_BODY_BYTES: usize = 1 << 20;

/// Link management routes.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create a short link
/// - `GET  /stats/{id}`   - Stored record and hit count of a short link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{id}", get(stats_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
