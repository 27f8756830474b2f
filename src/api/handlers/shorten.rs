//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// Unknown fields, trailing JSON values and bodies over 1 MiB are rejected.
///
/// # Response
///
/// ```json
/// { "short": "aZ3kP9qL", "url": "https://example.com/some/long/path" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is malformed or the URL is invalid
/// - 413 Payload Too Large if the body exceeds the limit
/// - 500 Internal Server Error if no free short id was found or storage failed
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(request) = payload?;

    let link = state.shortener.create(&request.url).await?;

    tracing::info!(short = %link.id, url = %link.url, "Created short link");

    Ok(Json(link.into()))
}
