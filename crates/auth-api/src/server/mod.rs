//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use auth_common::{AppConfig, AppError};
use auth_core::SharedCredentialStore;
use auth_service::ServiceContext;
use auth_store::InMemoryCredentialStore;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Create AppState backed by a fresh in-memory credential store
///
/// # Errors
/// Returns `AppError::Config` if the hashing parameters are invalid
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    create_app_state_with_store(config, Arc::new(InMemoryCredentialStore::new()))
}

/// Create AppState around an existing credential store
///
/// # Errors
/// Returns `AppError::Config` if the hashing parameters are invalid
pub fn create_app_state_with_store(
    config: AppConfig,
    store: SharedCredentialStore,
) -> Result<AppState, AppError> {
    let service_context = ServiceContext::from_config(store, &config)?;

    info!(
        memory_kib = config.hashing.memory_kib,
        iterations = config.hashing.iterations,
        parallelism = config.hashing.parallelism,
        "Service context ready"
    );

    Ok(AppState::new(service_context, config))
}

/// Bind to `addr` and serve until a shutdown signal arrives
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))?;

    info!("Server stopped");

    Ok(())
}

/// Run the complete server with configuration
///
/// # Errors
/// Returns an error if the configured address is invalid, state cannot be
/// built, or the server fails
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config.api.address().parse().map_err(|e| {
        AppError::Config(format!("Invalid listen address {}: {e}", config.api.address()))
    })?;

    let state = create_app_state(config)?;
    let app = create_app(state);

    run_server(app, addr).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
