//! # auth-service
//!
//! Application layer: request DTOs, the service context, and the
//! authentication use cases (register, login, authorize).

pub mod dto;
pub mod services;

pub use dto::{
    Credentials, HealthResponse, LoginRequest, LoginResponse, MessageResponse,
    ProtectedResponse, ReadinessResponse, RegisterRequest,
};
pub use services::{AuthService, ServiceContext, ServiceContextBuilder};
