//! Roster route configuration.
//!
//! Defines all routes for the REST API.

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use roster_persistence::core::{BulkUserInsert, UserStore};

use crate::handlers;
use crate::state::AppState;

/// Creates all REST API routes.
///
/// # Routes
///
/// ## System-level
/// - `POST /login` - Credential check
/// - `GET /health` - Health check
/// - `GET /_liveness` / `GET /_readiness` - Probes
///
/// ## Collection-level
/// - `GET /users` - List (search, filter, sort, paginate)
/// - `POST /users` - Create
/// - `GET /users/bulk-upload/template` - Import template
/// - `POST /users/bulk-upload` - Bulk upload
/// - `GET /users/export/{csv,xlsx,pdf}` - Report export
///
/// ## Instance-level
/// - `PUT /users/{id}` - Update
/// - `DELETE /users/{id}` - Soft delete
/// - `PATCH /users/status/{id}` - Toggle active flag
/// - `PATCH /users/{id}/profile-image` - Profile image
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: UserStore + BulkUserInsert + Send + Sync + 'static,
{
    Router::new()
        // System-level routes
        .route("/login", post(handlers::login_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::health::liveness_handler))
        .route("/_readiness", get(handlers::health::readiness_handler::<S>))
        // Collection-level routes
        .route("/users", get(handlers::list_handler::<S>))
        .route("/users", post(handlers::create_handler::<S>))
        .route(
            "/users/bulk-upload",
            post(handlers::bulk_upload_handler::<S>),
        )
        .route(
            "/users/bulk-upload/template",
            get(handlers::template_handler),
        )
        .route("/users/export/csv", get(handlers::export_csv_handler::<S>))
        .route(
            "/users/export/xlsx",
            get(handlers::export_xlsx_handler::<S>),
        )
        .route("/users/export/pdf", get(handlers::export_pdf_handler::<S>))
        // Instance-level routes
        .route("/users/{id}", put(handlers::update_handler::<S>))
        .route("/users/{id}", delete(handlers::delete_handler::<S>))
        .route(
            "/users/status/{id}",
            patch(handlers::status_handler::<S>),
        )
        .route(
            "/users/{id}/profile-image",
            patch(handlers::profile_image_handler::<S>),
        )
        // State
        .with_state(state)
}
