//! Extractors that report rejections through [`AppError`].
//!
//! axum's own `Json` and `Path` answer a bad request with a plain-text body.
//! These wrappers convert the rejection so every failure uses the JSON error
//! envelope.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde_json::Value;

use crate::error::AppError;

/// A JSON request body.
///
/// Invalid JSON, a missing `Content-Type` and an unreadable body all become
/// `validation_error` (400).
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// The numeric `{id}` segment of a recommendation route.
pub struct RecommendationId(pub i64);

impl<S> FromRequestParts<S> for RecommendationId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
