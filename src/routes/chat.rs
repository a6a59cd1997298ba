//! Chat routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::chat;
use crate::state::AppState;

/// Create chat routes
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/api/chat", post(chat::send_message))
        .route("/api/chat/history", get(chat::chat_history))
}
