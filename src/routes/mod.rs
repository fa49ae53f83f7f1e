//! HTTP route handlers for the item API.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;
pub mod items;

use axum::{
    middleware,
    routing::get,
    Router,
};

use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::check))
        .route("/api/v1/data", get(items::get).post(items::create))
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
