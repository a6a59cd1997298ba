//! Authentication models
//!
//! The user row, the sanitized profile returned to clients, and the auth
//! request/response DTOs. The password hash never appears in any response
//! type.

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

/// User identity row. Immutable after creation apart from nothing at all:
/// this core exposes no update or delete operations on users.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub student_id: String,
    pub course: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

/// Public profile fields (sanitized for API responses)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub student_id: String,
    pub course: String,
    pub year: i32,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            student_id: user.student_id,
            course: user.course,
            year: user.year,
        }
    }
}

/// Registration request, validated at the boundary before reaching the core
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 64))]
    pub student_id: String,
    #[validate(length(min = 1, max = 128))]
    pub course: String,
    #[validate(range(min = 1, max = 10))]
    pub year: i32,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Token plus public profile, returned by register and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "p1ssw0rd!".to_string(),
            student_id: "S1".to_string(),
            course: "CS".to_string(),
            year: 1,
        }
    }

    #[test]
    fn test_register_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let req = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_short_password() {
        let req = RegisterRequest {
            password: "p1".to_string(),
            ..valid_request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_empty_username() {
        let req = RegisterRequest {
            username: String::new(),
            ..valid_request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            student_id: "S1".to_string(),
            course: "CS".to_string(),
            year: 1,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$12$secret"));
    }
}
