//! # auth-common
//!
//! Shared utilities including configuration, error handling, password hashing,
//! token issuance, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, HashedPassword, PasswordService, TokenError, TokenService};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, Environment, HashingConfig, JwtConfig,
    ServerConfig,
};
pub use error::{AppError, AppResult, ErrorKind, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
