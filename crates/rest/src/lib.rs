//! # roster-rest - REST API Implementation
//!
//! This crate provides the HTTP layer of the Roster user-administration
//! service: a thin pass-through translating requests into calls against the
//! persistence boundary and the bulk-import pipeline.
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | login | POST | `/login` |
//! | list users | GET | `/users` |
//! | create user | POST | `/users` |
//! | update user | PUT | `/users/{id}` |
//! | soft-delete user | DELETE | `/users/{id}` |
//! | toggle status | PATCH | `/users/status/{id}` |
//! | profile image | PATCH | `/users/{id}/profile-image` |
//! | import template | GET | `/users/bulk-upload/template` |
//! | bulk upload | POST | `/users/bulk-upload` |
//! | export CSV | GET | `/users/export/csv` |
//! | export Excel | GET | `/users/export/xlsx` |
//! | export PDF | GET | `/users/export/pdf` |
//! | health | GET | `/health`, `/_liveness`, `/_readiness` |
//!
//! ## Authorization
//!
//! There is deliberately no session state: every mutating request carries the
//! acting role as an explicit field (`user_role` in JSON bodies, `role` in the
//! bulk-upload multipart form). The privileged role name is deployment
//! configuration ([`ServerConfig::admin_role`], default `admin`); requests
//! with any other role are refused with 403 before the store is touched.
//!
//! ## Error Handling
//!
//! All errors are returned as a JSON body `{"error": "..."}` (validation
//! failures additionally carry an `"errors"` array) with these status codes:
//!
//! | HTTP Status | Condition |
//! |-------------|-----------|
//! | 400 | Malformed payload, unparsable file, missing columns, validation failure |
//! | 401 | Login with unknown credentials |
//! | 403 | Acting role lacks privilege |
//! | 404 | Unknown or tombstoned user id |
//! | 409 | Duplicate email on single create |
//! | 501 | Export format not configured (PDF without fonts) |
//! | 500 | Store/backend failure |
//!
//! During a bulk upload, per-row problems (validation violations, duplicate
//! emails) are never HTTP errors - they are rows of the returned report.
//!
//! ## Configuration
//!
//! The server is configured via command line or `ROSTER_*` environment
//! variables - see [`ServerConfig`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster_rest::{ServerConfig, create_app};
//! use roster_persistence::backends::sqlite::SqliteStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = SqliteStore::open("roster.db")?;
//!     store.init_schema()?;
//!
//!     let app = create_app(store);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error responses
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`handlers`] - HTTP request handlers for each operation
//! - [`extractors`] - Axum extractors for listing parameters
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use roster_persistence::core::{BulkUserInsert, UserStore};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: UserStore + BulkUserInsert + Send + Sync + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up all routes, the timeout/trace middleware stack, the request body
/// limit, and (if enabled) CORS.
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: UserStore + BulkUserInsert + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        store.backend_name()
    );

    let max_body_size = config.max_body_size;
    let request_timeout = config.request_timeout;
    let enable_cors = config.enable_cors;
    let cors = build_cors_layer(&config);

    // Create application state
    let state = AppState::new(Arc::new(store), config);

    // Build the router with all routes
    let router = routing::routes::create_routes(state)
        .layer(axum::extract::DefaultBodyLimit::max(max_body_size));

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(request_timeout),
        ));

    let router = if enable_cors { router.layer(cors) } else { router };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster_rest={},tower_http=debug", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
