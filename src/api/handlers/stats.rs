//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record of a short link.
///
/// # Endpoint
///
/// `GET /stats/{id}`
///
/// Reading stats does not count as a hit.
///
/// # Response
///
/// ```json
/// {
///   "url": "https://example.com",
///   "short": "aZ3kP9qL",
///   "hits": 42,
///   "createdAt": "2025-03-01T12:30:45Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.shortener.stats(&id).await?;

    Ok(Json(link.into()))
}
