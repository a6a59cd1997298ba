//! Timetable routes

use axum::{routing::get, Router};

use crate::handlers::timetable;
use crate::state::AppState;

/// Create timetable routes
pub fn timetable_routes() -> Router<AppState> {
    Router::new().route(
        "/api/timetable",
        get(timetable::list_timetable).post(timetable::add_timetable_entry),
    )
}
