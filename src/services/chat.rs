//! Campus assistant chat proxy
//!
//! Thin proxy to an OpenAI-compatible chat completions API. One best-effort
//! request per message, no retries; any transport or provider failure
//! surfaces to the caller as an upstream error. Successful exchanges are
//! persisted so clients can replay a session.

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{ChatMessage, ChatResponse};

/// System prompt pinning the assistant to campus topics
const SYSTEM_PROMPT: &str = "You are a helpful university assistant. Help students with \
    information about courses, campus locations, events, library resources, and general \
    university queries. Be helpful, friendly, and concise.";

/// Chat proxy errors
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Chat service is not configured with an API key")]
    MissingApiKey,

    #[error("Upstream chat provider error: {0}")]
    Upstream(String),

    #[error("Malformed upstream response: {0}")]
    InvalidResponse(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for ChatError {
    fn from(e: sqlx::Error) -> Self {
        ChatError::DatabaseError(e.to_string())
    }
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            other => ApiError::UpstreamServiceError(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionReply,
}

#[derive(Deserialize)]
struct CompletionReply {
    content: String,
}

/// Chat proxy service
pub struct ChatService {
    client: reqwest::Client,
    db_pool: PgPool,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl ChatService {
    /// Create a new ChatService
    pub fn new(db_pool: PgPool, api_url: String, api_key: Option<String>, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            db_pool,
            api_url,
            api_key,
            model,
        }
    }

    /// Send a message to the assistant on behalf of a user and persist the
    /// exchange. A missing session id starts a fresh session named after the
    /// caller and the current time.
    pub async fn send(
        &self,
        username: &str,
        message: &str,
        session_id: Option<String>,
    ) -> Result<ChatResponse, ChatError> {
        let api_key = self.api_key.as_deref().ok_or(ChatError::MissingApiKey)?;

        let session_id = session_id
            .unwrap_or_else(|| format!("{}_{}", username, Utc::now().timestamp_millis()));

        let body = CompletionRequest {
            model: &self.model,
            messages: vec![
                CompletionMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                CompletionMessage {
                    role: "user",
                    content: message,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Upstream(e.to_string()))?
            .error_for_status()
            .map_err(|e| ChatError::Upstream(e.to_string()))?;

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ChatError::InvalidResponse("No choices in response".to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO chat_messages (id, username, session_id, message, response, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(&session_id)
        .bind(message)
        .bind(&reply)
        .bind(Utc::now())
        .execute(&self.db_pool)
        .await?;

        Ok(ChatResponse {
            response: reply,
            session_id,
        })
    }

    /// List a user's chat history, oldest first, optionally scoped to one
    /// session. Capped at 100 exchanges.
    pub async fn history(
        &self,
        username: &str,
        session_id: Option<String>,
    ) -> Result<Vec<ChatMessage>, ChatError> {
        let messages: Vec<ChatMessage> = match session_id {
            Some(session_id) => {
                sqlx::query_as(
                    r#"
                    SELECT id, username, session_id, message, response, created_at
                    FROM chat_messages
                    WHERE username = $1 AND session_id = $2
                    ORDER BY created_at ASC
                    LIMIT 100
                    "#,
                )
                .bind(username)
                .bind(session_id)
                .fetch_all(&self.db_pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT id, username, session_id, message, response, created_at
                    FROM chat_messages
                    WHERE username = $1
                    ORDER BY created_at ASC
                    LIMIT 100
                    "#,
                )
                .bind(username)
                .fetch_all(&self.db_pool)
                .await?
            }
        };

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_chat_errors_map_to_bad_gateway() {
        let api: ApiError = ChatError::MissingApiKey.into();
        assert_eq!(api.status_code(), StatusCode::BAD_GATEWAY);

        let api: ApiError = ChatError::Upstream("connection reset".into()).into();
        assert_eq!(api.status_code(), StatusCode::BAD_GATEWAY);

        let api: ApiError = ChatError::DatabaseError("down".into()).into();
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_completion_request_shape() {
        let body = CompletionRequest {
            model: "gpt-4o-mini",
            messages: vec![
                CompletionMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                CompletionMessage {
                    role: "user",
                    content: "where is the library?",
                },
            ],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "where is the library?");
    }

    #[test]
    fn test_completion_response_parsing() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"Floor 2."}}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Floor 2.");
    }
}
