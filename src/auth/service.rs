//! Authentication service
//!
//! Core business logic for the register/login flows: uniqueness checks,
//! password hashing, token issuance, and profile lookup. Constructed once in
//! `main` from the immutable configuration and shared across requests.

use sqlx::types::chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};

use super::jwt::{issue_token, JwtError};
use super::password::{self, PasswordError};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Username or email already taken; the message names which
    #[error("{0}")]
    DuplicateIdentity(String),

    /// Unknown username and wrong password collapse into this one variant
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Password hashing error: {0}")]
    HashError(String),

    #[error("Token error: {0}")]
    TokenError(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        AuthError::DatabaseError(e.to_string())
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        AuthError::TokenError(e.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::DuplicateIdentity(msg) => ApiError::DuplicateIdentity(msg),
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::UserNotFound => ApiError::NotFound("User not found".to_string()),
            AuthError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            AuthError::HashError(msg) | AuthError::TokenError(msg) => ApiError::InternalError(msg),
        }
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db_pool: PgPool,
    jwt_secret: String,
    token_ttl_days: i64,
    bcrypt_cost: u32,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(db_pool: PgPool, jwt_secret: String, token_ttl_days: i64, bcrypt_cost: u32) -> Self {
        Self {
            db_pool,
            jwt_secret,
            token_ttl_days,
            bcrypt_cost,
        }
    }

    /// Register a new identity and issue its first token.
    ///
    /// Fails with `DuplicateIdentity` on a taken username or email and
    /// performs no write in that case. The unique constraints on the table
    /// catch the race where two registrations pass the pre-check together.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthResponse, AuthError> {
        let existing: Option<(String, String)> = sqlx::query_as(
            r#"
            SELECT username, email FROM users
            WHERE username = $1 OR email = $2
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .fetch_optional(&self.db_pool)
        .await?;

        if let Some((username, _)) = existing {
            let msg = if username == req.username {
                "Username already exists"
            } else {
                "Email already exists"
            };
            return Err(AuthError::DuplicateIdentity(msg.to_string()));
        }

        let password_hash = password::hash(&req.password, self.bcrypt_cost)
            .map_err(|e| AuthError::HashError(e.to_string()))?;

        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (id, username, email, password_hash, student_id, course, year, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, username, email, password_hash, student_id, course, year, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.username)
        .bind(&req.email)
        .bind(&password_hash)
        .bind(&req.student_id)
        .bind(&req.course)
        .bind(req.year)
        .bind(Utc::now())
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::DuplicateIdentity("Username or email already exists".to_string())
            } else {
                AuthError::DatabaseError(e.to_string())
            }
        })?;

        let token = issue_token(&user.username, &self.jwt_secret, self.token_ttl_days)?;

        tracing::info!(username = %user.username, "User registered");

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Authenticate an existing identity and issue a token.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller; the unknown-username path still pays for a hash verification.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, AuthError> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, student_id, course, year, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(&req.username)
        .fetch_optional(&self.db_pool)
        .await?;

        let user = match user {
            Some(user) => user,
            None => {
                password::verify_dummy(&req.password);
                return Err(AuthError::InvalidCredentials);
            }
        };

        let matches = match password::verify(&req.password, &user.password_hash) {
            Ok(matches) => matches,
            // Corrupted storage, not a bad guess
            Err(PasswordError::CorruptedHash(e)) => return Err(AuthError::HashError(e)),
            Err(e) => return Err(AuthError::HashError(e.to_string())),
        };

        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let token = issue_token(&user.username, &self.jwt_secret, self.token_ttl_days)?;

        tracing::info!(username = %user.username, "User logged in");

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Fetch the full identity for a username resolved by the guard.
    ///
    /// A token stays valid per signature and expiry even if the identity it
    /// names disappears, so callers map this `UserNotFound` to a 404.
    pub async fn get_profile(&self, username: &str) -> Result<User, AuthError> {
        sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, student_id, course, year, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or(AuthError::UserNotFound)
    }

    /// Get JWT secret (for middleware access)
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

/// Unique-constraint violation (Postgres error 23505)
fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_error_mapping_to_api_error() {
        let api: ApiError = AuthError::DuplicateIdentity("Username already exists".into()).into();
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);

        let api: ApiError = AuthError::InvalidCredentials.into();
        assert_eq!(api.status_code(), StatusCode::UNAUTHORIZED);

        let api: ApiError = AuthError::UserNotFound.into();
        assert_eq!(api.status_code(), StatusCode::NOT_FOUND);

        let api: ApiError = AuthError::DatabaseError("down".into()).into();
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // Same display for unknown username and wrong password
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }
}
