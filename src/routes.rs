//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (public)
//! - `GET  /{id}`        - Short link redirect (public)
//! - `POST /shorten`     - Create a short link (API key when configured)
//! - `GET  /stats/{id}`  - Link statistics (API key when configured)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - `X-API-Key` on link management routes

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, request_id, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .route("/{id}", get(redirect_handler))
        .merge(api_router)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(request_id::set_layer())
                .layer(tracing::layer())
                .layer(request_id::propagate_layer()),
        )
}
