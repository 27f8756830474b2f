//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL and counts the hit.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Returns `302 Found` with the stored URL in `Location`. The hit counter is
/// incremented before the response is sent.
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.shortener.resolve(&id).await?;

    tracing::debug!(short = %id, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}
