//! Middleware for the campus API
//!
//! Request tracing, security headers, and the bearer-token authorization
//! guard applied to every protected operation.

pub mod auth;
mod security;
mod tracing;

pub use auth::AuthenticatedUser;
pub use security::security_headers;
pub use tracing::request_tracing;
