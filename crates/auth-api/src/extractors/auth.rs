//! Authentication extractor
//!
//! Extracts and validates the bearer token from the Authorization header.

use auth_common::AppError;
use auth_service::AuthService;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Username carried by the token
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // A missing header, another scheme, or "Bearer" with no token all
        // fail here and are reported the same way.
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::from(AppError::MissingToken))?;

        let app_state = AppState::from_ref(state);

        let claims = AuthService::new(app_state.service_context()).authorize(bearer.token())?;

        Ok(AuthUser {
            username: claims.username,
        })
    }
}
