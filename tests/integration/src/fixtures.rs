//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Username and password body used by /register and /login
#[derive(Debug, Clone, Serialize)]
pub struct CredentialsBody {
    pub username: String,
    pub password: String,
}

impl CredentialsBody {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn unique() -> Self {
        Self::new(format!("testuser{}", unique_suffix()), "TestPass123!")
    }

    /// Same user, different password
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        Self::new(self.username.clone(), password)
    }
}

/// `{ "message": ... }` body
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Successful login body
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Successful /protected body
#[derive(Debug, Deserialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub username: String,
}
