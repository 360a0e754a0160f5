//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Message strings
//! are fixed; existing clients match on them.

use serde::Serialize;

/// Body carrying only a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Successful registration
    pub fn registered() -> Self {
        Self::new("User registered successfully")
    }
}

/// Successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

impl LoginResponse {
    pub fn new(token: String) -> Self {
        Self {
            message: "Login successful".to_string(),
            token,
        }
    }
}

/// Successful access to the protected resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub username: String,
}

impl ProtectedResponse {
    pub fn new(username: String) -> Self {
        Self {
            message: "Protected data".to_string(),
            username,
        }
    }
}

/// Liveness probe body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness probe body
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub users: usize,
}

impl ReadinessResponse {
    pub fn ready(users: usize) -> Self {
        Self {
            status: "ready",
            users,
        }
    }
}
