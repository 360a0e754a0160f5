//! Authentication utilities

mod jwt;
mod password;

pub(crate) use jwt::expiry_timestamp;
pub use jwt::{Claims, TokenError, TokenService};
pub use password::{HashedPassword, PasswordService};
