use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing id parameter")]
    MissingId,

    #[error("Invalid id parameter")]
    InvalidId,

    #[error("Invalid request payload")]
    InvalidPayload(#[source] JsonRejection),

    #[error("Item not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database connection failed")]
    Unavailable(#[source] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingId | AppError::InvalidId | AppError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Unavailable(e) => {
                tracing::warn!(error = %e, "Database unreachable");
                StatusCode::SERVICE_UNAVAILABLE
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
