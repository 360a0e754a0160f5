//! Data transfer objects for API requests and responses

mod requests;
mod responses;

pub use requests::{Credentials, LoginRequest, RegisterRequest};
pub use responses::{
    HealthResponse, LoginResponse, MessageResponse, ProtectedResponse, ReadinessResponse,
};
