//! JWT utilities for authentication
//!
//! Issues and verifies HS256 bearer tokens using the `jsonwebtoken` crate.
//! The server keeps no record of issued tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;

/// Token verification and signing failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    SignatureInvalid,

    #[error("token has no username claim")]
    MissingClaim,

    #[error("token has expired")]
    Expired,

    #[error("token signing failed: {0}")]
    Signing(String),
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity the token was issued to
    #[serde(default)]
    pub username: String,
    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
    /// Expiration time (Unix timestamp), absent when tokens do not expire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Build claims for a username issued now
    ///
    /// # Errors
    /// Returns `TokenError::Signing` if the lifetime overflows the timestamp range
    pub fn new(
        username: impl Into<String>,
        lifetime_seconds: Option<i64>,
    ) -> Result<Self, TokenError> {
        let now = Utc::now();
        let exp = match lifetime_seconds {
            Some(secs) => Some(expiry_timestamp(now, secs).ok_or_else(|| {
                TokenError::Signing(format!("token lifetime of {secs}s is out of range"))
            })?),
            None => None,
        };

        Ok(Self {
            username: username.into(),
            iat: now.timestamp(),
            exp,
        })
    }
}

/// Unix timestamp `lifetime_seconds` after `now`, or `None` on overflow
pub(crate) fn expiry_timestamp(now: DateTime<Utc>, lifetime_seconds: i64) -> Option<i64> {
    Duration::try_seconds(lifetime_seconds)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .map(|exp| exp.timestamp())
}

/// JWT service for issuing and verifying tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_seconds: Option<i64>,
}

impl TokenService {
    /// Create a new token service with the given secret and optional lifetime
    #[must_use]
    pub fn new(secret: &str, expiry_seconds: Option<i64>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is optional; when present it is still enforced.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_seconds,
        }
    }

    /// Create a token service from configuration
    #[must_use]
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, config.expiry_seconds)
    }

    /// Configured token lifetime in seconds, if any
    #[must_use]
    pub fn expiry_seconds(&self) -> Option<i64> {
        self.expiry_seconds
    }

    /// Issue a signed token for a username
    ///
    /// # Errors
    /// Returns `TokenError::Signing` if the expiry overflows or encoding fails
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        let claims = Claims::new(username, self.expiry_seconds)?;
        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token and return its claims
    ///
    /// # Errors
    /// - `Malformed` if the token cannot be split or decoded
    /// - `SignatureInvalid` if the signature or algorithm does not match
    /// - `Expired` if the token carries an `exp` in the past
    /// - `MissingClaim` if the payload has no non-empty username
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        TokenError::SignatureInvalid
                    }
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed,
                }
            })?;

        let claims = token_data.claims;
        if claims.username.is_empty() {
            return Err(TokenError::MissingClaim);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("expiry_seconds", &self.expiry_seconds)
            .finish_non_exhaustive()
    }
}
