//! Library routes

use axum::{routing::get, Router};

use crate::handlers::library;
use crate::state::AppState;

/// Create library routes
pub fn library_routes() -> Router<AppState> {
    Router::new().route(
        "/api/library",
        get(library::search_library).post(library::add_book),
    )
}
