//! API Integration Tests
//!
//! Each test starts its own server on an ephemeral port with an empty
//! in-memory store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use integration_tests::{
    assert_json, assert_message, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_health_ready_counts_users() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .post("/register", &CredentialsBody::unique())
        .await
        .unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body, json!({ "status": "ready", "users": 1 }));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_full_flow() {
    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = CredentialsBody::new("alice", "pw1");

    let response = server.post("/register", &credentials).await.unwrap();
    assert_message(response, StatusCode::CREATED, "User registered successfully")
        .await
        .unwrap();

    let response = server.post("/login", &credentials).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.message, "Login successful");
    assert!(!login.token.is_empty());

    let response = server.get_auth("/protected", &login.token).await.unwrap();
    let protected: ProtectedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(protected.message, "Protected data");
    assert_eq!(protected.username, "alice");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = CredentialsBody::unique();

    server.post("/register", &credentials).await.unwrap();

    let response = server
        .post("/register", &credentials.with_password("another"))
        .await
        .unwrap();
    assert_message(response, StatusCode::BAD_REQUEST, "Username already exists")
        .await
        .unwrap();

    // The stored password was not replaced
    let response = server.post("/login", &credentials).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/register", &json!({ "username": "alice" }))
        .await
        .unwrap();
    assert_message(
        response,
        StatusCode::BAD_REQUEST,
        "Username and password are required",
    )
    .await
    .unwrap();

    // Nothing was stored
    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["users"], 0);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/login", &json!({ "password": "pw1" }))
        .await
        .unwrap();
    assert_message(
        response,
        StatusCode::BAD_REQUEST,
        "Username and password are required",
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_invalid_json_body() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post_raw("/register", "{\"username\":").await.unwrap();
    assert_message(response, StatusCode::BAD_REQUEST, "Invalid request body")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_unknown_user() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/login", &CredentialsBody::new("bob", "x"))
        .await
        .unwrap();
    assert_message(response, StatusCode::UNAUTHORIZED, "User not found")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = CredentialsBody::unique();
    server.post("/register", &credentials).await.unwrap();

    let response = server
        .post("/login", &credentials.with_password("wrong"))
        .await
        .unwrap();
    assert_message(response, StatusCode::UNAUTHORIZED, "Invalid password")
        .await
        .unwrap();
}

// ============================================================================
// Protected Resource Tests
// ============================================================================

#[tokio::test]
async fn test_protected_without_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/protected").await.unwrap();
    assert_message(response, StatusCode::UNAUTHORIZED, "Missing authorization token")
        .await
        .unwrap();

    let response = server
        .get_with_authorization("/protected", "Token abc")
        .await
        .unwrap();
    assert_message(response, StatusCode::UNAUTHORIZED, "Missing authorization token")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_protected_with_garbage_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get_auth("/protected", "garbage").await.unwrap();
    assert_message(response, StatusCode::UNAUTHORIZED, "Invalid authorization token")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_token_from_other_server_is_rejected() {
    let mut other_config = test_config();
    other_config.jwt.secret = "a-different-secret".to_string();
    let other = TestServer::start_with_config(other_config).await.unwrap();
    let server = TestServer::start().await.unwrap();

    let credentials = CredentialsBody::unique();
    other.post("/register", &credentials).await.unwrap();
    let response = other.post("/login", &credentials).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/protected", &login.token).await.unwrap();
    assert_message(response, StatusCode::UNAUTHORIZED, "Invalid authorization token")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_token_survives_without_expiry() {
    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = CredentialsBody::unique();
    server.post("/register", &credentials).await.unwrap();

    let response = server.post("/login", &credentials).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    for _ in 0..3 {
        let response = server.get_auth("/protected", &login.token).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registration_single_winner() {
    let server = Arc::new(TestServer::start().await.expect("Failed to start server"));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let server = Arc::clone(&server);
            tokio::spawn(async move {
                server
                    .post("/register", &CredentialsBody::new("racer", format!("pw{i}")))
                    .await
                    .map(|response| response.status())
            })
        })
        .collect();

    let mut created = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::BAD_REQUEST => rejected += 1,
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(rejected, 9);
}
