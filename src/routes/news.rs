//! News and events routes

use axum::{routing::get, Router};

use crate::handlers::news;
use crate::state::AppState;

/// Create news and events routes
pub fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/api/news", get(news::list_news).post(news::create_news))
        .route("/api/events", get(news::list_events))
}
