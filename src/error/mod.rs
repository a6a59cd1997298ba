//! Centralized API error handling
//!
//! This module provides a unified error type for API responses with proper
//! HTTP status code mapping and JSON error responses. Authentication failures
//! are deliberately coarse: the response never says more than the category.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Duplicate identity: {0}")]
    DuplicateIdentity(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upstream service error: {0}")]
    UpstreamServiceError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in the response
#[derive(Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// Get the error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::DuplicateIdentity(_) => "DUPLICATE_IDENTITY",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::UpstreamServiceError(_) => "UPSTREAM_SERVICE_ERROR",
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DuplicateIdentity(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamServiceError(_) => StatusCode::BAD_GATEWAY,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to return to the caller.
    ///
    /// Storage and upstream failures keep their detail in the logs only.
    fn public_message(&self) -> String {
        match self {
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => {
                "Internal server error".to_string()
            }
            ApiError::UpstreamServiceError(_) => "Upstream service error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Log server errors with full detail before it is stripped
        match &self {
            ApiError::DatabaseError(_)
            | ApiError::InternalError(_)
            | ApiError::UpstreamServiceError(_) => {
                tracing::error!(error = %self, code = %error_code, "Server error occurred");
            }
            _ => {
                tracing::debug!(error = %self, code = %error_code, "Client error occurred");
            }
        }

        let body = ErrorResponse {
            error: ErrorDetails {
                code: error_code.to_string(),
                message: self.public_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// Convenience conversions from common error types

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            _ => ApiError::DatabaseError(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::UpstreamServiceError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("Invalid JSON: {}", err))
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ApiError::DuplicateIdentity("alice".to_string()).error_code(),
            "DUPLICATE_IDENTITY"
        );
        assert_eq!(
            ApiError::InvalidCredentials.error_code(),
            "INVALID_CREDENTIALS"
        );
        assert_eq!(
            ApiError::Unauthorized("no token".to_string()).error_code(),
            "UNAUTHORIZED"
        );
        assert_eq!(
            ApiError::UpstreamServiceError("timeout".to_string()).error_code(),
            "UPSTREAM_SERVICE_ERROR"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::DuplicateIdentity("alice".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Unauthorized("expired".to_string()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("user".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::UpstreamServiceError("timeout".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::DatabaseError("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_errors_are_not_leaked() {
        let err = ApiError::DatabaseError("connection refused at 10.0.0.5:5432".to_string());
        assert_eq!(err.public_message(), "Internal server error");

        let err = ApiError::UpstreamServiceError("api key sk-123 rejected".to_string());
        assert_eq!(err.public_message(), "Upstream service error");

        // Client errors keep their message
        let err = ApiError::DuplicateIdentity("Username already exists".to_string());
        assert!(err.public_message().contains("Username already exists"));
    }

    #[test]
    fn test_invalid_credentials_is_generic() {
        // The same variant is produced for unknown usernames and wrong
        // passwords, so the message must not distinguish the two.
        let err = ApiError::InvalidCredentials;
        assert_eq!(err.public_message(), "Invalid credentials");
    }
}
