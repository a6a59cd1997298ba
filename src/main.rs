//! Campus Companion Backend Server
//!
//! Main entry point for the campus companion API: user accounts, timetable,
//! grades, news and events, library catalog search, QR attendance, and a
//! proxy to the campus assistant chat service.

use axum::http::{HeaderValue, Method};
use axum::{routing::get, Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use campus_companion_server::auth::AuthService;
use campus_companion_server::config::Config;
use campus_companion_server::db;
use campus_companion_server::middleware;
use campus_companion_server::routes;
use campus_companion_server::services::ChatService;
use campus_companion_server::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!(environment = %config.environment.as_str(), "Starting campus companion server");

    // Initialize database connection pool and bring the schema up to date
    let db_pool = match db::create_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db::run_migrations(&db_pool).await {
        tracing::error!("Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    // Initialize services from the immutable configuration
    let auth_service = Arc::new(AuthService::new(
        db_pool.clone(),
        config.jwt_secret.clone(),
        config.token_ttl_days,
        config.bcrypt_cost,
    ));

    let chat_service = Arc::new(ChatService::new(
        db_pool.clone(),
        config.llm_api_url.clone(),
        config.llm_api_key.clone(),
        config.llm_model.clone(),
    ));

    let app_state = AppState::new(db_pool.clone(), auth_service, chat_service);

    // Clone db_pool for health check
    let health_db_pool = db_pool.clone();

    // Create the app router
    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(move || health_check(health_db_pool.clone())))
        .merge(routes::auth_routes())
        .merge(routes::timetable_routes())
        .merge(routes::grades_routes())
        .merge(routes::news_routes())
        .merge(routes::library_routes())
        .merge(routes::attendance_routes())
        .merge(routes::chat_routes())
        .with_state(app_state)
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(configure_cors(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Serve with graceful shutdown
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server shutdown complete");
}

async fn root() -> &'static str {
    "Campus Companion API Server"
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
    database: String,
    version: String,
}

/// Health check endpoint
async fn health_check(pool: sqlx::PgPool) -> Json<HealthResponse> {
    let database = match db::check_health(&pool).await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    let status = if database == "connected" {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn configure_cors(config: &Config) -> CorsLayer {
    let Some(allowed_origins_str) = config.cors_allowed_origins.as_deref() else {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = allowed_origins_str
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
