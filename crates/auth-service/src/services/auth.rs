//! Authentication service
//!
//! Handles user registration, login, and bearer token authorization. Each
//! operation runs its checks in a fixed order and stops at the first failure.

use auth_common::{AppError, AppResult, Claims};
use auth_core::entities::UserRecord;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

use super::context::ServiceContext;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// Order: required fields, username free, hash and insert.
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: RegisterRequest) -> AppResult<MessageResponse> {
        let credentials = request.into_credentials()?;

        if self.ctx.store().exists(&credentials.username).await? {
            warn!(username = %credentials.username, "Registration failed: username taken");
            return Err(AppError::UsernameTaken);
        }

        let password_hash = self.hash_password(credentials.password).await?;

        // A concurrent registration may have claimed the name since the check;
        // the store reports that as a duplicate, which maps to the same error.
        self.ctx
            .store()
            .insert(UserRecord::new(credentials.username.clone(), password_hash))
            .await
            .map_err(|e| {
                warn!(username = %credentials.username, error = %e, "Registration failed on insert");
                AppError::from(e)
            })?;

        info!(username = %credentials.username, "User registered successfully");

        Ok(MessageResponse::registered())
    }

    /// Login with username and password
    ///
    /// Order: required fields, user exists, password matches, issue token.
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let credentials = request.into_credentials()?;

        let record = self
            .ctx
            .store()
            .find(&credentials.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %credentials.username, "Login failed: user not found");
                AppError::UserNotFound
            })?;

        let is_valid = self
            .verify_password(credentials.password, record.password_hash)
            .await?;

        if !is_valid {
            warn!(username = %record.username, "Login failed: invalid password");
            return Err(AppError::InvalidPassword);
        }

        let token = self.ctx.token_service().issue(&record.username)?;

        info!(username = %record.username, "User logged in successfully");

        Ok(LoginResponse::new(token))
    }

    /// Validate a bearer token and return its claims
    #[instrument(skip(self, token))]
    pub fn authorize(&self, token: &str) -> AppResult<Claims> {
        if token.is_empty() {
            return Err(AppError::MissingToken);
        }

        self.ctx.token_service().verify(token).map_err(|e| {
            warn!(error = %e, "Rejected bearer token");
            AppError::from(e)
        })
    }

    /// Argon2 is deliberately slow, so it runs on the blocking pool.
    async fn hash_password(&self, password: String) -> AppResult<String> {
        let hasher = self.ctx.password_service().clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(AppError::internal)?
            .map(auth_common::HashedPassword::into_inner)
    }

    async fn verify_password(&self, password: String, password_hash: String) -> AppResult<bool> {
        let hasher = self.ctx.password_service().clone();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
            .await
            .map_err(AppError::internal)?
    }
}
