//! Credential store trait (port) - defines the interface for user record storage
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation, so an in-memory table and a durable
//! backend are interchangeable behind `Arc<dyn CredentialStore>`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::UserRecord;
use crate::error::DomainError;

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Shared handle to a credential store
pub type SharedCredentialStore = Arc<dyn CredentialStore>;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Check whether a record with this username is present
    async fn exists(&self, username: &str) -> RepoResult<bool>;

    /// Insert a new record
    ///
    /// The existence check and the insert form one atomic step: of two
    /// concurrent inserts for the same username exactly one succeeds and
    /// the other gets `DomainError::DuplicateUsername`.
    async fn insert(&self, record: UserRecord) -> RepoResult<()>;

    /// Find a record by username
    async fn find(&self, username: &str) -> RepoResult<Option<UserRecord>>;

    /// Number of stored records
    async fn count(&self) -> RepoResult<usize>;
}
