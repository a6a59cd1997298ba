//! News and events HTTP handlers
//!
//! News and event listings are the public face of the API; publishing is
//! authenticated and records the caller as author.

use axum::{extract::State, Json};
use sqlx::types::chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{EventItem, NewsItem, NewsItemRequest};
use crate::state::AppState;

/// GET /api/news - Latest 50 news items, newest first (public)
pub async fn list_news(State(state): State<AppState>) -> Result<Json<Vec<NewsItem>>, ApiError> {
    let news: Vec<NewsItem> = sqlx::query_as(
        r#"
        SELECT id, title, content, category, image, author, created_at
        FROM news_items
        ORDER BY created_at DESC
        LIMIT 50
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(news))
}

/// POST /api/news - Publish a news item attributed to the caller
pub async fn create_news(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<NewsItemRequest>,
) -> Result<Json<NewsItem>, ApiError> {
    req.validate()?;

    let item: NewsItem = sqlx::query_as(
        r#"
        INSERT INTO news_items (id, title, content, category, image, author, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, title, content, category, image, author, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.title)
    .bind(&req.content)
    .bind(&req.category)
    .bind(&req.image)
    .bind(&user.username)
    .bind(Utc::now())
    .fetch_one(&state.db)
    .await?;

    Ok(Json(item))
}

/// GET /api/events - Next 50 events, soonest first (public)
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<EventItem>>, ApiError> {
    let events: Vec<EventItem> = sqlx::query_as(
        r#"
        SELECT id, title, content, category, image, author, date, created_at
        FROM events
        ORDER BY date ASC
        LIMIT 50
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(events))
}
