//! # auth-store
//!
//! Storage layer implementing the `CredentialStore` trait defined in `auth-core`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use auth_core::SharedCredentialStore;
//! use auth_store::InMemoryCredentialStore;
//!
//! let store: SharedCredentialStore = Arc::new(InMemoryCredentialStore::new());
//! ```

pub mod repositories;

// Re-export commonly used types
pub use repositories::InMemoryCredentialStore;
