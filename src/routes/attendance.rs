//! Attendance routes

use axum::{routing::get, Router};

use crate::handlers::attendance;
use crate::state::AppState;

/// Create attendance routes
pub fn attendance_routes() -> Router<AppState> {
    Router::new().route(
        "/api/attendance",
        get(attendance::list_attendance).post(attendance::mark_attendance),
    )
}
