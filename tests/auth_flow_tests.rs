//! Register/login flow tests against a real database
//!
//! Drives `AuthService` end to end: the register→login roundtrip, duplicate
//! rejection without a write, and the indistinguishability of unknown
//! usernames and wrong passwords.

#[cfg(test)]
mod tests {
    use sqlx::PgPool;
    use uuid::Uuid;

    use campus_companion_server::auth::{verify_token, AuthError, AuthService};
    use campus_companion_server::db;
    use campus_companion_server::error::ApiError;
    use campus_companion_server::models::{LoginRequest, RegisterRequest};

    const SECRET: &str = "flow-test-secret";

    // Minimum bcrypt cost keeps the tests fast
    const TEST_COST: u32 = 4;

    /// Helper to create a test database pool with the schema applied
    async fn setup_test_db() -> PgPool {
        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/campus_companion_test".to_string());

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    fn test_service(pool: PgPool) -> AuthService {
        AuthService::new(pool, SECRET.to_string(), 30, TEST_COST)
    }

    /// Registration request with a unique username/email per run so the
    /// tests can be re-run against the same database
    fn fresh_registration() -> RegisterRequest {
        let tag = Uuid::new_v4().simple().to_string();
        RegisterRequest {
            username: format!("alice_{}", &tag[..12]),
            email: format!("alice_{}@x.com", &tag[..12]),
            password: "p1ssw0rd!".to_string(),
            student_id: "S1".to_string(),
            course: "CS".to_string(),
            year: 1,
        }
    }

    async fn user_count_by_email(pool: &PgPool, email: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(pool)
            .await
            .expect("count query failed")
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_register_then_login_roundtrip() {
        let pool = setup_test_db().await;
        let service = test_service(pool);

        let req = fresh_registration();
        let username = req.username.clone();
        let password = req.password.clone();

        let registered = service.register(req).await.expect("register should succeed");
        assert_eq!(registered.user.username, username);

        // The issued token names the registered identity
        let claims = verify_token(&registered.token, SECRET).unwrap();
        assert_eq!(claims.sub, username);

        // Same credentials log in and get a token with the same subject
        let logged_in = service
            .login(LoginRequest {
                username: username.clone(),
                password,
            })
            .await
            .expect("login should succeed");

        let claims = verify_token(&logged_in.token, SECRET).unwrap();
        assert_eq!(claims.sub, username);
        assert_eq!(logged_in.user.username, username);
        assert_eq!(logged_in.user.email, registered.user.email);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_duplicate_username_rejected_without_write() {
        let pool = setup_test_db().await;
        let service = test_service(pool.clone());

        let first = fresh_registration();
        let username = first.username.clone();
        service.register(first).await.expect("first register should succeed");

        // Same username, different email
        let second = RegisterRequest {
            username,
            ..fresh_registration()
        };
        let second_email = second.email.clone();

        let result = service.register(second).await;
        assert!(matches!(result, Err(AuthError::DuplicateIdentity(_))));

        let api: ApiError = result.unwrap_err().into();
        assert_eq!(api.status_code(), axum::http::StatusCode::BAD_REQUEST);

        // The rejected registration left nothing behind
        assert_eq!(user_count_by_email(&pool, &second_email).await, 0);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_duplicate_email_rejected_without_write() {
        let pool = setup_test_db().await;
        let service = test_service(pool.clone());

        let first = fresh_registration();
        let email = first.email.clone();
        service.register(first).await.expect("first register should succeed");

        // Same email, different username
        let second = RegisterRequest {
            email: email.clone(),
            ..fresh_registration()
        };
        let second_username = second.username.clone();

        let result = service.register(second).await;
        assert!(matches!(result, Err(AuthError::DuplicateIdentity(_))));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(&second_username)
            .fetch_one(&pool)
            .await
            .expect("count query failed");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_bad_credentials_are_indistinguishable() {
        let pool = setup_test_db().await;
        let service = test_service(pool);

        let req = fresh_registration();
        let username = req.username.clone();
        service.register(req).await.expect("register should succeed");

        // Known username, wrong password
        let wrong_password = service
            .login(LoginRequest {
                username,
                password: "not-the-password".to_string(),
            })
            .await
            .unwrap_err();

        // Username that was never registered
        let unknown_username = service
            .login(LoginRequest {
                username: format!("nobody_{}", Uuid::new_v4().simple()),
                password: "not-the-password".to_string(),
            })
            .await
            .unwrap_err();

        // Same variant, same message, same status code, same error code
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_username, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_username.to_string());

        let a: ApiError = wrong_password.into();
        let b: ApiError = unknown_username.into();
        assert_eq!(a.status_code(), b.status_code());
        assert_eq!(a.error_code(), b.error_code());
        assert_eq!(a.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }
}
