//! Handlers for item lookup and creation.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::models::{CreateItem, Item};
use crate::state::AppState;

/// Query parameters for item lookup.
///
/// The id is kept as a raw string so a missing parameter and an unparsable
/// one produce distinct errors.
#[derive(Deserialize)]
pub struct GetParams {
    pub id: Option<String>,
}

/// Handler for fetching a single item by id.
#[instrument(name = "items::get", skip(state, params))]
pub async fn get(
    State(state): State<AppState>,
    Query(params): Query<GetParams>,
) -> Result<Json<Item>, AppError> {
    let raw = params.id.ok_or(AppError::MissingId)?;
    // Anything outside i32 cannot be a primary key; negative values parse
    // and simply match no row.
    let id: i32 = raw.parse().map_err(|_| AppError::InvalidId)?;

    let item = state.db.item(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(item))
}

/// Handler for creating a new item.
///
/// The Json rejection is captured so malformed bodies surface as this
/// service's own 400 payload instead of axum's default.
#[instrument(name = "items::create", skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let Json(req) = payload.map_err(AppError::InvalidPayload)?;

    let id = state.db.insert_item(&req.name, req.price).await?;
    tracing::debug!(id, name = %req.name, "Item created");

    let item = Item {
        id,
        name: req.name,
        price: req.price,
    };

    Ok((StatusCode::CREATED, Json(item)))
}
