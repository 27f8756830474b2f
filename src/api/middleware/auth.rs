//! API key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Header carrying the shared API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects requests whose `X-API-Key` header does not match the configured key.
///
/// # Header Format
///
/// ```text
/// X-API-Key: <key>
/// ```
///
/// When no key is configured every request passes through.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, not valid UTF-8,
/// or does not match.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = st.api_key.as_deref() else {
        return Ok(next.run(req).await);
    };

    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(key) if key == expected => {}
        Some(_) => {
            tracing::warn!("Rejected request with invalid API key");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "API key is invalid"}),
            ));
        }
        None => {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "X-API-Key header is missing"}),
            ));
        }
    }

    Ok(next.run(req).await)
}
