//! Grades HTTP handlers

use axum::{extract::State, Json};
use sqlx::types::chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{Grade, GradeRequest};
use crate::state::AppState;

/// GET /api/grades - List the caller's grades
pub async fn list_grades(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Grade>>, ApiError> {
    let grades: Vec<Grade> = sqlx::query_as(
        r#"
        SELECT id, username, course_name, grade, credits, created_at
        FROM grades
        WHERE username = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(&user.username)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(grades))
}

/// POST /api/grades - Record a grade for the caller
pub async fn add_grade(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<GradeRequest>,
) -> Result<Json<Grade>, ApiError> {
    req.validate()?;

    let grade: Grade = sqlx::query_as(
        r#"
        INSERT INTO grades (id, username, course_name, grade, credits, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, username, course_name, grade, credits, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&user.username)
    .bind(&req.name)
    .bind(&req.grade)
    .bind(req.credits)
    .bind(Utc::now())
    .fetch_one(&state.db)
    .await?;

    Ok(Json(grade))
}
