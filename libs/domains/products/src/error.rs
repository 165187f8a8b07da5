use axum::response::{IntoResponse, Response};
use jsonapi::ApiError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to ApiError for the JSON:API error envelope
impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => ApiError::NotFound(format!("Product {} not found", id)),
            ProductError::InvalidArgument(msg) => ApiError::BadRequest(msg),
            ProductError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let api_error: ApiError = self.into();
        api_error.into_response()
    }
}

// Repository-level failures are never downgraded; they surface as Internal
impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Internal(err.to_string())
    }
}
