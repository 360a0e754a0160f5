//! Authentication handlers
//!
//! Endpoints for user registration and login.

use auth_service::{AuthService, LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use axum::{extract::State, Json};

use crate::extractors::JsonBody;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with username and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
