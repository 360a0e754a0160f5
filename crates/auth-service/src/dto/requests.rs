//! Request DTOs for API endpoints
//!
//! Fields are optional at the serde level so that a missing field, a `null`,
//! and an empty string all surface as the same "required" error instead of
//! a deserialization failure.

use auth_common::{AppError, AppResult};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,

    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// User login request
#[derive(Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,

    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Check required fields and take the validated pair
    pub fn into_credentials(self) -> AppResult<Credentials> {
        self.validate().map_err(|_| AppError::MissingCredentials)?;
        Credentials::from_parts(self.username, self.password)
    }
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Check required fields and take the validated pair
    pub fn into_credentials(self) -> AppResult<Credentials> {
        self.validate().map_err(|_| AppError::MissingCredentials)?;
        Credentials::from_parts(self.username, self.password)
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// A username and plaintext password that passed presence checks
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Take the pair out of a request that already passed `validate()`
    fn from_parts(username: Option<String>, password: Option<String>) -> AppResult<Self> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(AppError::MissingCredentials);
        };
        Ok(Self { username, password })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}
