//! Axum extractors for JSON:API requests.

use axum::{
    extract::{FromRequest, FromRequestParts, Json, Path, Query, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use crate::document::RequestDocument;
use crate::error::{first_field_error, ApiError};

/// Extractor for the `{"data": {"attributes": {...}}}` request envelope.
///
/// Deserializes the envelope, then runs structural validation on the
/// attributes before the handler body executes. Malformed JSON rejects
/// as Bad Request; a failing field rejects as Validation Error carrying
/// the first reported field error only.
///
/// # Example
/// ```ignore
/// use jsonapi::ValidatedDocument;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateWidgetAttrs {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn create_widget(ValidatedDocument(attrs): ValidatedDocument<CreateWidgetAttrs>) {
///     // attrs passed structural validation
/// }
/// ```
pub struct ValidatedDocument<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedDocument<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(document) = Json::<RequestDocument<T>>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()).into_response())?;

        let attributes = document.data.attributes;
        attributes
            .validate()
            .map_err(|e| first_field_error(&e).into_response())?;

        Ok(ValidatedDocument(attributes))
    }
}

/// Query-string extractor whose rejection carries the error envelope.
///
/// Axum's own `Query` rejects with a plain-text body; this wrapper
/// rejects malformed query strings with a Bad Request envelope instead.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()).into_response())?;

        Ok(QueryParams(params))
    }
}

/// Extractor for UUID path parameters.
///
/// Parses the `{id}` segment, rejecting malformed ids with a Bad
/// Request envelope instead of axum's plain-text rejection.
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match Uuid::parse_str(&id) {
            Ok(uuid) => Ok(UuidPath(uuid)),
            Err(_) => Err(ApiError::BadRequest(format!("Invalid UUID: {}", id)).into_response()),
        }
    }
}
