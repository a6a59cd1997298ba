//! Chat HTTP handlers
//!
//! Proxy to the campus assistant plus owner-scoped history.

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{ChatHistoryQuery, ChatMessage, ChatRequest, ChatResponse};
use crate::state::AppState;

/// POST /api/chat - Send a message to the campus assistant
pub async fn send_message(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    req.validate()?;

    let response = state
        .chat_service
        .send(&user.username, &req.message, req.session_id)
        .await?;

    Ok(Json(response))
}

/// GET /api/chat/history - List the caller's chat history
pub async fn chat_history(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(params): Query<ChatHistoryQuery>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let messages = state
        .chat_service
        .history(&user.username, params.session_id)
        .await?;

    Ok(Json(messages))
}
