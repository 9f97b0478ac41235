//! Single-user create handler.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use roster_import::validate;
use roster_model::{CandidateUser, Role};
use roster_persistence::core::UserStore;
use serde::Deserialize;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Create request body: the candidate fields, an optional role for the new
/// user, and the acting role.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// The candidate fields.
    #[serde(flatten)]
    pub candidate: CandidateUser,
    /// Role to assign to the new user; defaults to the view-only role.
    #[serde(default)]
    pub role: Option<Role>,
    /// The acting role, checked against the configured privileged role.
    #[serde(default)]
    pub user_role: String,
}

/// Handler for the create operation.
///
/// Runs the same fixed business rules as the bulk import (password
/// required), then inserts.
///
/// # HTTP Request
///
/// `POST /users`
///
/// # Response
///
/// - `201 Created` - the new user, with a `Location` header
/// - `400 Bad Request` - validation failed; body carries every violation
/// - `403 Forbidden` - acting role lacks privilege
/// - `409 Conflict` - email already exists
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    Json(request): Json<CreateUserRequest>,
) -> RestResult<Response>
where
    S: UserStore + Send + Sync,
{
    state.require_admin(&request.user_role)?;

    let errors = validate(&request.candidate, true);
    if !errors.is_empty() {
        return Err(RestError::Validation { errors });
    }

    let stored = state
        .store()
        .create(request.candidate, request.role.unwrap_or_default())
        .await?;

    debug!(id = %stored.id, email = %stored.email, "User created");

    let location = format!("{}/users/{}", state.base_url(), stored.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(stored),
    )
        .into_response())
}
