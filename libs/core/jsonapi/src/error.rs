//! Error translation to the JSON:API error envelope.
//!
//! `ApiError` is the single point where internal failure kinds become
//! wire errors. Every failure path yields `{"errors": [...]}` with one
//! error object; clients never see a partial success body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// One member of the top-level `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorObject {
    /// HTTP status code as a string, per JSON:API
    pub status: String,
    /// Short, stable summary of the failure kind
    pub title: String,
    /// Human-readable explanation of this occurrence
    pub detail: String,
}

/// Error response document: `{"errors": [...]}`, always an array even
/// with a single element.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

impl ErrorDocument {
    pub fn single(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorObject {
                status: status.as_u16().to_string(),
                title: title.into(),
                detail: detail.into(),
            }],
        }
    }
}

/// Failure taxonomy exposed on the wire.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Validation failed on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, title, detail) = match self {
            ApiError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "Not Found", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "Bad Request", msg)
            }
            ApiError::Validation { field, message } => {
                tracing::info!(field = %field, "Validation error: {}", message);
                (
                    StatusCode::BAD_REQUEST,
                    "Validation Error",
                    format!("{}: {}", field, message),
                )
            }
            ApiError::Internal(msg) => {
                // Log the real cause, never leak it to the client
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorDocument::single(status, title, detail))).into_response()
    }
}

/// Surface the first field error reported by the validator.
///
/// The error envelope is deliberately single-message: when several
/// fields fail at once, only the first reported one is returned.
pub fn first_field_error(errors: &ValidationErrors) -> ApiError {
    for (field, field_errors) in errors.field_errors() {
        if let Some(err) = field_errors.first() {
            let message = err
                .message
                .as_ref()
                .map_or_else(|| err.code.to_string(), |m| m.to_string());
            return ApiError::Validation {
                field: field.to_string(),
                message,
            };
        }
    }
    ApiError::BadRequest("request validation failed".to_string())
}
