//! Authorization guard
//!
//! Axum extractor that validates the `Authorization: Bearer` token on every
//! protected operation and resolves it to a caller username. The guard does
//! not touch the user store; handlers that need the full identity perform
//! their own lookup and answer 404 if the subject no longer exists.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use std::sync::Arc;

use crate::auth::{verify_token, AuthService, JwtError};
use crate::error::ApiError;

/// Caller identity resolved from a valid bearer token.
///
/// Derived fresh on every request and discarded afterwards; downstream
/// operations trust the username unconditionally.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Extractor for authenticated users
///
/// Absent, malformed, wrongly-signed, expired, and subject-less tokens all
/// reject with 401.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(user: AuthenticatedUser) -> impl IntoResponse {
///     format!("Hello, {}", user.username)
/// }
/// ```
#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    ApiError::Unauthorized(
                        "Authorization header with Bearer token required".to_string(),
                    )
                    .into_response()
                })?;

        let auth_service = Arc::<AuthService>::from_ref(state);

        let claims = verify_token(bearer.token(), auth_service.jwt_secret()).map_err(|e| {
            let message = match e {
                JwtError::TokenExpired => "Token has expired",
                _ => "Invalid token",
            };
            ApiError::Unauthorized(message.to_string()).into_response()
        })?;

        Ok(AuthenticatedUser { username: claims.sub })
    }
}
