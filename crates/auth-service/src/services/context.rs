//! Service context - dependency container for services
//!
//! Holds the credential store, password hasher and token service needed by
//! the authentication use cases.

use std::sync::Arc;

use auth_common::{AppConfig, AppError, PasswordService, TokenService};
use auth_core::traits::{CredentialStore, SharedCredentialStore};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    store: SharedCredentialStore,
    password_service: PasswordService,
    token_service: Arc<TokenService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        store: SharedCredentialStore,
        password_service: PasswordService,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            store,
            password_service,
            token_service,
        }
    }

    /// Build a context from configuration around an existing store
    pub fn from_config(store: SharedCredentialStore, config: &AppConfig) -> Result<Self, AppError> {
        ServiceContextBuilder::new()
            .store(store)
            .password_service(PasswordService::new(&config.hashing)?)
            .token_service(Arc::new(TokenService::from_config(&config.jwt)))
            .build()
    }

    /// Get the credential store
    pub fn store(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Get the token service
    pub fn token_service(&self) -> &TokenService {
        self.token_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &"dyn CredentialStore")
            .field("token_service", &self.token_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    store: Option<SharedCredentialStore>,
    password_service: Option<PasswordService>,
    token_service: Option<Arc<TokenService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: SharedCredentialStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn password_service(mut self, service: PasswordService) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn token_service(mut self, service: Arc<TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// The password service falls back to the default work factor; the
    /// store and token service have no defaults.
    pub fn build(self) -> Result<ServiceContext, AppError> {
        Ok(ServiceContext::new(
            self.store
                .ok_or_else(|| AppError::Config("credential store is required".to_string()))?,
            self.password_service.unwrap_or_default(),
            self.token_service
                .ok_or_else(|| AppError::Config("token service is required".to_string()))?,
        ))
    }
}
