//! Grades routes

use axum::{routing::get, Router};

use crate::handlers::grades;
use crate::state::AppState;

/// Create grades routes
pub fn grades_routes() -> Router<AppState> {
    Router::new().route(
        "/api/grades",
        get(grades::list_grades).post(grades::add_grade),
    )
}
