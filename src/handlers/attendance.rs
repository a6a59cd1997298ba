//! Attendance HTTP handlers
//!
//! Attendance is marked by scanning a class QR code; the record stores the
//! raw code payload alongside the caller and timestamp.

use axum::{extract::State, Json};
use sqlx::types::chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{AttendanceRecord, AttendanceRequest, AttendanceResponse};
use crate::state::AppState;

/// POST /api/attendance - Mark the caller present for a class
pub async fn mark_attendance(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<AttendanceRequest>,
) -> Result<Json<AttendanceResponse>, ApiError> {
    req.validate()?;

    let record: AttendanceRecord = sqlx::query_as(
        r#"
        INSERT INTO attendance_records (id, username, class_name, qr_code, recorded_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, username, class_name, qr_code, recorded_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&user.username)
    .bind(&req.class_name)
    .bind(&req.qr_code)
    .bind(Utc::now())
    .fetch_one(&state.db)
    .await?;

    Ok(Json(AttendanceResponse {
        message: "Attendance marked successfully".to_string(),
        record,
    }))
}

/// GET /api/attendance - List the caller's attendance records, newest first
pub async fn list_attendance(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<AttendanceRecord>>, ApiError> {
    let records: Vec<AttendanceRecord> = sqlx::query_as(
        r#"
        SELECT id, username, class_name, qr_code, recorded_at
        FROM attendance_records
        WHERE username = $1
        ORDER BY recorded_at DESC
        "#,
    )
    .bind(&user.username)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(records))
}
