//! Auth API Server entry point
//!
//! Run with:
//! ```bash
//! JWT_SECRET=change-me cargo run -p auth-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use auth_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first so the log format can follow the environment
    let config = AppConfig::from_env()?;

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        token_expiry = ?config.jwt.expiry_seconds,
        "Configuration loaded"
    );

    auth_api::run(config).await?;

    Ok(())
}
