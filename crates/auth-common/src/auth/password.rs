//! Password hashing and verification utilities
//!
//! Uses Argon2id with a per-hash random salt. The work factor (memory,
//! iterations, lanes) comes from `HashingConfig`.

use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::config::HashingConfig;
use crate::error::AppError;

/// A PHC-format Argon2 hash string
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Borrow the encoded hash
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the encoded hash
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HashedPassword(..)")
    }
}

/// Password service for dependency injection
#[derive(Clone)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Create a password service with the given work factor
    ///
    /// # Errors
    /// Returns `AppError::Config` if the parameters are out of range
    pub fn new(config: &HashingConfig) -> Result<Self, AppError> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| AppError::Config(format!("Invalid password hashing parameters: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a password with a fresh salt
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<HashedPassword, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| HashedPassword(hash.to_string()))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
    }

    /// Verify a password against a stored hash
    ///
    /// The salt and parameters embedded in the hash are used, so hashes made
    /// under an older work factor still verify. The final digest comparison
    /// is constant-time.
    ///
    /// # Errors
    /// Returns an error if the stored hash cannot be parsed or was not made
    /// by Argon2
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::Internal(anyhow::anyhow!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl std::fmt::Debug for PasswordService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordService").finish_non_exhaustive()
    }
}
