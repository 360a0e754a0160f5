//! HTTP request handlers
//!
//! Each handler builds the service it needs from shared state and delegates.

pub mod auth;
pub mod health;
pub mod protected;
