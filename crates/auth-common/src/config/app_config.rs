//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use std::collections::HashMap;
use std::env;
use std::str::FromStr;

use chrono::Utc;
use serde::Deserialize;

use crate::auth::expiry_timestamp;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub jwt: JwtConfig,
    pub hashing: HashingConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Token signing configuration
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime; `None` issues tokens without an `exp` claim
    #[serde(default)]
    pub expiry_seconds: Option<i64>,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("expiry_seconds", &self.expiry_seconds)
            .finish()
    }
}

/// Argon2 work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HashingConfig {
    #[serde(default = "default_hash_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_hash_iterations")]
    pub iterations: u32,
    #[serde(default = "default_hash_parallelism")]
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_hash_memory_kib(),
            iterations: default_hash_iterations(),
            parallelism: default_hash_parallelism(),
        }
    }
}

impl HashingConfig {
    /// Lowest-cost parameters; only for tests
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "auth-service".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_hash_memory_kib() -> u32 {
    argon2::Params::DEFAULT_M_COST // 19 MiB
}

fn default_hash_iterations() -> u32 {
    argon2::Params::DEFAULT_T_COST
}

fn default_hash_parallelism() -> u32 {
    argon2::Params::DEFAULT_P_COST
}

impl AppConfig {
    /// Build a configuration with defaults everywhere except the signing secret
    #[must_use]
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: default_env(),
            },
            api: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            jwt: JwtConfig {
                secret: secret.into(),
                expiry_seconds: None,
            },
            hashing: HashingConfig::default(),
            cors: CorsConfig::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `JWT_SECRET` is missing or empty, or if a numeric
    /// variable cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a fixed set of variables
    ///
    /// # Errors
    /// Same as [`AppConfig::from_env`]
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?;
        if secret.is_empty() {
            return Err(ConfigError::InvalidValue(
                "JWT_SECRET",
                "must not be empty".to_string(),
            ));
        }

        let env = match lookup("APP_ENV") {
            Some(value) => Environment::parse(&value)
                .ok_or(ConfigError::InvalidValue("APP_ENV", value))?,
            None => default_env(),
        };

        let expiry_seconds: Option<i64> = parse_var(&lookup, "JWT_EXPIRY_SECONDS")?;
        if let Some(secs) = expiry_seconds {
            if secs <= 0 {
                return Err(ConfigError::InvalidValue(
                    "JWT_EXPIRY_SECONDS",
                    "must be positive".to_string(),
                ));
            }
            if expiry_timestamp(Utc::now(), secs).is_none() {
                return Err(ConfigError::InvalidValue(
                    "JWT_EXPIRY_SECONDS",
                    format!("{secs} is out of range"),
                ));
            }
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_var(&lookup, "API_PORT")?.unwrap_or_else(default_port),
            },
            jwt: JwtConfig {
                secret,
                expiry_seconds,
            },
            hashing: HashingConfig {
                memory_kib: parse_var(&lookup, "HASH_MEMORY_KIB")?
                    .unwrap_or_else(default_hash_memory_kib),
                iterations: parse_var(&lookup, "HASH_ITERATIONS")?
                    .unwrap_or_else(default_hash_iterations),
                parallelism: parse_var(&lookup, "HASH_PARALLELISM")?
                    .unwrap_or_else(default_hash_parallelism),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
