//! Application error types
//!
//! Unified error handling for the entire application. The `Display` text of
//! every client-facing variant is the exact message returned to callers.

use auth_core::DomainError;
use serde::Serialize;

use crate::auth::TokenError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Username and password are required")]
    MissingCredentials,

    /// Carries the parser's detail for logs; clients only see the fixed text
    #[error("Invalid request body")]
    InvalidBody(String),

    // Conflict errors
    #[error("Username already exists")]
    UsernameTaken,

    // Authentication errors
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Missing authorization token")]
    MissingToken,

    #[error("Invalid authorization token")]
    InvalidToken(#[source] TokenError),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Broad error classes used to pick a response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed client input
    Validation,
    /// The resource already exists
    Conflict,
    /// Unknown user, wrong password, or bad token
    Authentication,
    /// Anything the client cannot fix
    Internal,
}

impl AppError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredentials | Self::InvalidBody(_) => ErrorKind::Validation,
            Self::UsernameTaken => ErrorKind::Conflict,
            Self::UserNotFound
            | Self::InvalidPassword
            | Self::MissingToken
            | Self::InvalidToken(_) => ErrorKind::Authentication,
            Self::Internal(_) | Self::Config(_) => ErrorKind::Internal,
        }
    }

    /// Get HTTP status code for this error
    ///
    /// Duplicate usernames answer 400 rather than 409; existing clients
    /// depend on it.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::Conflict => 400,
            ErrorKind::Authentication => 401,
            ErrorKind::Internal => 500,
        }
    }

    /// Get error code for logs and diagnostics
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::UsernameTaken => "USERNAME_EXISTS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Message safe to show to a client
    ///
    /// Server-side failures collapse into a generic message so causes never
    /// leak into responses.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DuplicateUsername(_) => Self::UsernameTaken,
            DomainError::Storage(msg) => Self::Internal(anyhow::anyhow!("storage failure: {msg}")),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(msg) => Self::Internal(anyhow::anyhow!("token signing failed: {msg}")),
            other => Self::InvalidToken(other),
        }
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            message: err.public_message(),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
