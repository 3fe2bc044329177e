//! Custom Axum extractors
//!
//! Malformed input is translated to [`ApiError`] here, before any handler
//! logic or database access runs.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;

/// JSON body with a shared rejection-to-422 translation.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}

/// Integer todo id extracted from the request path.
pub struct TodoId(pub i32);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation {
                message: "missing todo id".to_owned(),
            })?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::Validation {
            message: format!("invalid todo id: '{}'", raw),
        })?;

        Ok(Self(id))
    }
}
