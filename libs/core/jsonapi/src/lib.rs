//! JSON:API building blocks shared by domain crates.
//!
//! Provides the response/error envelope (`{data, links, meta}` and
//! `{errors: [...]}`), the error-to-status translation, and axum
//! extractors that run structural validation before a request reaches
//! the service layer.

pub mod document;
pub mod error;
pub mod extract;

// Re-export commonly used types
pub use document::{Document, Links, ListDocument, Meta, RequestDocument, RequestResource, Resource};
pub use error::{first_field_error, ApiError, ErrorDocument, ErrorObject};
pub use extract::{QueryParams, UuidPath, ValidatedDocument};
