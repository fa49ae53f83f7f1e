//! Health check endpoint for container orchestration.
//!
//! Unlike a bare liveness probe, this verifies the database connection is
//! live, so orchestrators and load balancers stop routing traffic when the
//! backing store is unreachable.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Health check handler.
///
/// Pings the database: 200 when it answers, 503 when it does not.
#[instrument(name = "health::check", skip(state))]
pub async fn check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.db.ping().await.map_err(AppError::Unavailable)?;

    Ok(Json(json!({ "status": "ok" })))
}
