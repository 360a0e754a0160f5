//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, protected};
use crate::state::AppState;

/// Create the main router with every endpoint
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Registration, login, and the token-guarded resource
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/protected", get(protected::protected))
}
