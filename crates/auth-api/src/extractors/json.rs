//! JSON body extractor
//!
//! Wraps `axum::Json` so body rejections render in the API's error format.

use auth_common::AppError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// JSON body extractor
///
/// A request without a JSON content type is treated as an empty object, so
/// handlers see their default (all fields missing) rather than a rejection.
/// Syntax errors and wrong field types are rejected as an invalid body.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(JsonBody(T::default())),
            Err(rejection) => {
                let detail = rejection.body_text();
                tracing::debug!(detail = %detail, "Rejected request body");
                Err(AppError::InvalidBody(detail).into())
            }
        }
    }
}
