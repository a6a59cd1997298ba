//! Authentication module
//!
//! Credential-based authentication for the campus API.
//! - bcrypt password hashing and verification
//! - signed bearer token issuance and validation (HS256, 30-day expiry)
//! - register/login flows over the user store

mod jwt;
mod password;
mod service;

pub use jwt::{issue_token, verify_token, Claims, JwtError};
pub use service::{AuthError, AuthService};
