//! Protected resource handler

use auth_service::ProtectedResponse;
use axum::Json;

use crate::extractors::AuthUser;

/// Return data for the authenticated caller
///
/// GET /protected
pub async fn protected(auth: AuthUser) -> Json<ProtectedResponse> {
    Json(ProtectedResponse::new(auth.username))
}
