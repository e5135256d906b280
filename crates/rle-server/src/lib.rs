//! HTTP API server (Axum) exposing the run-length codec.
//!
//! Provides text endpoints, document upload/download endpoints and a
//! health check.

pub mod error;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use state::AppState;

/// Build the application router with all routes.
pub fn app() -> Router {
    let state = AppState::new();
    app_with_state(state)
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_bytes;
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::codec_routes())
        .merge(routes::file_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
