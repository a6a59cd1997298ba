//! Library catalog HTTP handlers
//!
//! Public case-insensitive substring search over title, author, and ISBN;
//! adding books requires authentication.

use axum::{
    extract::{Query, State},
    Json,
};
use sqlx::types::chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{LibraryBook, LibraryBookRequest, LibraryQuery};
use crate::state::AppState;

/// GET /api/library?query= - Search the catalog (public)
///
/// Without a query the first 50 books come back unfiltered.
pub async fn search_library(
    State(state): State<AppState>,
    Query(params): Query<LibraryQuery>,
) -> Result<Json<Vec<LibraryBook>>, ApiError> {
    let books: Vec<LibraryBook> = match params.query {
        Some(query) if !query.is_empty() => {
            // ILIKE with the query embedded in a pattern; % and _ in user
            // input widen the match but cannot escape the parameter
            let pattern = format!("%{}%", query);
            sqlx::query_as(
                r#"
                SELECT id, title, author, isbn, available, location, campus, created_at
                FROM library_books
                WHERE title ILIKE $1 OR author ILIKE $1 OR isbn ILIKE $1
                LIMIT 50
                "#,
            )
            .bind(pattern)
            .fetch_all(&state.db)
            .await?
        }
        _ => {
            sqlx::query_as(
                r#"
                SELECT id, title, author, isbn, available, location, campus, created_at
                FROM library_books
                LIMIT 50
                "#,
            )
            .fetch_all(&state.db)
            .await?
        }
    };

    Ok(Json(books))
}

/// POST /api/library - Add a book to the catalog
pub async fn add_book(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(req): Json<LibraryBookRequest>,
) -> Result<Json<LibraryBook>, ApiError> {
    req.validate()?;

    let book: LibraryBook = sqlx::query_as(
        r#"
        INSERT INTO library_books (id, title, author, isbn, available, location, campus, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, title, author, isbn, available, location, campus, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.title)
    .bind(&req.author)
    .bind(&req.isbn)
    .bind(req.available)
    .bind(&req.location)
    .bind(&req.campus)
    .bind(Utc::now())
    .fetch_one(&state.db)
    .await?;

    Ok(Json(book))
}
