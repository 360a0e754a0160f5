//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DomainError::DuplicateUsername("alice".to_string());
        assert_eq!(err.to_string(), "Username already exists: alice");

        let err = DomainError::Storage("down".to_string());
        assert_eq!(err.to_string(), "Storage error: down");
    }
}
