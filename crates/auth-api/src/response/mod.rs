//! Response types and error handling for API endpoints
//!
//! Every failure renders as `{ "message": "..." }` with the status chosen by
//! the error's kind.

use auth_common::{AppError, ErrorResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

/// API error type for consistent error responses
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub AppError);

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        self.0.error_code()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self.0, code = self.error_code(), "Server error occurred");
        } else {
            debug!(code = self.error_code(), status = status.as_u16(), "Request rejected");
        }

        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
