//! # auth-core
//!
//! Domain layer containing the user record entity, the credential store port, and domain errors.
//! This crate has zero dependencies on infrastructure (storage backends, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::UserRecord;
pub use error::DomainError;
pub use traits::{CredentialStore, RepoResult, SharedCredentialStore};
