//! Application state shared across handlers
//!
//! Holds the pooled database connection and the two stateful services. All
//! of it is immutable after startup; requests share nothing else.

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::AuthService;
use crate::services::ChatService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth_service: Arc<AuthService>,
    pub chat_service: Arc<ChatService>,
}

impl AppState {
    pub fn new(db: PgPool, auth_service: Arc<AuthService>, chat_service: Arc<ChatService>) -> Self {
        Self {
            db,
            auth_service,
            chat_service,
        }
    }
}

// The authorization guard extracts Arc<AuthService> from whatever state the
// router carries.
impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}
