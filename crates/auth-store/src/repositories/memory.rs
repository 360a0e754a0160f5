//! In-memory implementation of CredentialStore
//!
//! Records live for the lifetime of the process. `DashMap` shards the table so
//! lookups for different usernames do not contend.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, instrument};

use auth_core::entities::UserRecord;
use auth_core::error::DomainError;
use auth_core::traits::{CredentialStore, RepoResult};

/// In-memory credential store keyed by username
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: DashMap<String, UserRecord>,
}

impl InMemoryCredentialStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.users.contains_key(username))
    }

    #[instrument(skip(self, record), fields(username = %record.username))]
    async fn insert(&self, record: UserRecord) -> RepoResult<()> {
        // The shard write lock is held from the lookup through the insert.
        match self.users.entry(record.username.clone()) {
            Entry::Occupied(_) => {
                debug!("Insert rejected: username taken");
                Err(DomainError::DuplicateUsername(record.username))
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
                debug!("User record stored");
                Ok(())
            }
        }
    }

    async fn find(&self, username: &str) -> RepoResult<Option<UserRecord>> {
        Ok(self.users.get(username).map(|entry| entry.value().clone()))
    }

    async fn count(&self) -> RepoResult<usize> {
        Ok(self.len())
    }
}
