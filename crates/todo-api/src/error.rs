//! API error types and handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use todo_application::ApplicationError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed todo does not exist
    #[error("{0}")]
    NotFound(String),

    /// The request was understood but rejected by a business rule
    #[error("{0}")]
    BadRequest(String),

    /// The request body could not be decoded
    #[error("invalid request body")]
    Decode(#[from] JsonRejection),

    /// Storage failure
    #[error("{0}")]
    Internal(String),
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::ItemNotFound(_) => ApiError::NotFound(err.to_string()),
            ApplicationError::ValidationFailed(message) => ApiError::BadRequest(message),
            ApplicationError::Internal(message) => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Decode(_) => (StatusCode::BAD_REQUEST, "invalid_body"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        match &self {
            ApiError::Internal(message) => tracing::error!(%message, "request failed"),
            ApiError::Decode(rejection) => tracing::debug!(%rejection, "undecodable request body"),
            _ => {}
        }

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
