use crate::storage::StorageError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

/// Errors handed back by handlers. Handlers never pick a status code for
/// them; `IntoResponse` below is the single place that does.
#[derive(Debug, Error, ToSchema)]
pub enum AppError {
    #[schema(value_type = String)]
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[schema(value_type = String)]
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl AppError {
    pub fn kind(&self) -> &str {
        match self {
            AppError::Storage(e) => e.as_ref(),
            AppError::InvalidBody(_) => "invalid_body",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Storage(StorageError::Validation(_))
            | AppError::Storage(StorageError::InvalidId(_)) => StatusCode::BAD_REQUEST,
            AppError::Storage(StorageError::NotConnected) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Storage(StorageError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, error_kind = %self.kind(), "AppError");

        let body = Json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
