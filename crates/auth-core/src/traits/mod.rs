//! Domain traits (ports)

mod credential_store;

pub use credential_store::{CredentialStore, RepoResult, SharedCredentialStore};
