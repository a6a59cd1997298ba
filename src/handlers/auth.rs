//! Authentication HTTP handlers
//!
//! Register, login, and whoami. These are the only operations that touch
//! credentials; both success responses carry the token and the public
//! profile, never the hash.

use axum::{extract::State, Json};
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::state::AppState;

/// POST /api/auth/register - Create an identity and issue its first token
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    req.validate()?;

    let response = state.auth_service.register(req).await?;

    Ok(Json(response))
}

/// POST /api/auth/login - Authenticate and issue a token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    req.validate()?;

    let response = state.auth_service.login(req).await?;

    Ok(Json(response))
}

/// GET /api/auth/me - Get the current caller's profile
///
/// The guard only proves the token named this username; the row may be gone,
/// which answers 404.
pub async fn me(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = state.auth_service.get_profile(&user.username).await?;

    Ok(Json(profile.into()))
}
