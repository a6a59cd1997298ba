//! Data models for the campus companion backend
//!
//! One row type per record collection plus the request/response DTOs that
//! cross the HTTP boundary. Records outside the auth core are authenticated
//! passthrough data: the handlers trust the resolved username and perform a
//! single scoped read or write.

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

pub mod auth;
pub use auth::*;

/// Timetable entry, scoped to the owning username
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct TimetableEntry {
    pub id: Uuid,
    pub username: String,
    pub course: String,
    pub time: String,
    pub location: String,
    pub day: String,
    pub campus: String,
    pub created_at: DateTime<Utc>,
}

/// Request to add a timetable entry
#[derive(Debug, Deserialize, Validate)]
pub struct TimetableEntryRequest {
    #[validate(length(min = 1, max = 128))]
    pub course: String,
    #[validate(length(min = 1, max = 64))]
    pub time: String,
    #[validate(length(min = 1, max = 128))]
    pub location: String,
    #[validate(length(min = 1, max = 16))]
    pub day: String,
    #[validate(length(min = 1, max = 64))]
    pub campus: String,
}

/// Course grade, scoped to the owning username
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Grade {
    pub id: Uuid,
    pub username: String,
    pub course_name: String,
    pub grade: String,
    pub credits: i32,
    pub created_at: DateTime<Utc>,
}

/// Request to record a grade
#[derive(Debug, Deserialize, Validate)]
pub struct GradeRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(min = 1, max = 8))]
    pub grade: String,
    #[validate(range(min = 0, max = 120))]
    pub credits: i32,
}

/// News or announcement item; readable without authentication
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub image: Option<String>,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Request to publish a news item; the author is the authenticated caller
#[derive(Debug, Deserialize, Validate)]
pub struct NewsItemRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1, max = 64))]
    pub category: String,
    pub image: Option<String>,
}

/// Campus event; readable without authentication, soonest first
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct EventItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub image: Option<String>,
    pub author: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Library book in the catalog
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct LibraryBook {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
    pub location: String,
    pub campus: String,
    pub created_at: DateTime<Utc>,
}

/// Request to add a book to the catalog
#[derive(Debug, Deserialize, Validate)]
pub struct LibraryBookRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    #[validate(length(min = 1, max = 128))]
    pub author: String,
    #[validate(length(min = 1, max = 32))]
    pub isbn: String,
    pub available: bool,
    #[validate(length(min = 1, max = 128))]
    pub location: String,
    #[validate(length(min = 1, max = 64))]
    pub campus: String,
}

/// Query string for library search
#[derive(Debug, Deserialize)]
pub struct LibraryQuery {
    pub query: Option<String>,
}

/// Attendance record created by scanning a QR code
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub username: String,
    pub class_name: String,
    pub qr_code: String,
    pub recorded_at: DateTime<Utc>,
}

/// Request to mark attendance
#[derive(Debug, Deserialize, Validate)]
pub struct AttendanceRequest {
    #[validate(length(min = 1, max = 128))]
    pub class_name: String,
    #[validate(length(min = 1, max = 512))]
    pub qr_code: String,
}

/// Response for marking attendance
#[derive(Debug, Serialize)]
pub struct AttendanceResponse {
    pub message: String,
    pub record: AttendanceRecord,
}

/// One chat exchange persisted for history
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub username: String,
    pub session_id: String,
    pub message: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

/// Request to send a chat message to the assistant
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 4096))]
    pub message: String,
    pub session_id: Option<String>,
}

/// Assistant reply plus the session it belongs to
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

/// Query string for chat history
#[derive(Debug, Deserialize)]
pub struct ChatHistoryQuery {
    pub session_id: Option<String>,
}
