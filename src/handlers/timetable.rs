//! Timetable HTTP handlers
//!
//! Owner-scoped reads and writes of timetable entries.

use axum::{extract::State, Json};
use sqlx::types::chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{TimetableEntry, TimetableEntryRequest};
use crate::state::AppState;

/// GET /api/timetable - List the caller's timetable entries
pub async fn list_timetable(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<TimetableEntry>>, ApiError> {
    let entries: Vec<TimetableEntry> = sqlx::query_as(
        r#"
        SELECT id, username, course, time, location, day, campus, created_at
        FROM timetable_entries
        WHERE username = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(&user.username)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(entries))
}

/// POST /api/timetable - Add a timetable entry for the caller
pub async fn add_timetable_entry(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<TimetableEntryRequest>,
) -> Result<Json<TimetableEntry>, ApiError> {
    req.validate()?;

    let entry: TimetableEntry = sqlx::query_as(
        r#"
        INSERT INTO timetable_entries (id, username, course, time, location, day, campus, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, username, course, time, location, day, campus, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&user.username)
    .bind(&req.course)
    .bind(&req.time)
    .bind(&req.location)
    .bind(&req.day)
    .bind(&req.campus)
    .bind(Utc::now())
    .fetch_one(&state.db)
    .await?;

    Ok(Json(entry))
}
