//! User update handler.
//!
//! Email is immutable (it is the uniqueness key) and passwords are not
//! editable here, so the validator runs without the password requirement,
//! against the stored email.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use roster_import::validate;
use roster_model::{CandidateUser, Role, UserUpdate};
use roster_persistence::core::UserStore;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Update request body: the editable fields plus the acting role.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    /// New given name.
    pub first_name: String,
    /// New family name.
    pub last_name: String,
    /// New contact number.
    pub contact: String,
    /// New address.
    pub address: String,
    /// Optional role change for the edited user.
    #[serde(default)]
    pub role: Option<Role>,
    /// The acting role.
    #[serde(default)]
    pub user_role: String,
}

/// Handler for the update operation.
///
/// # HTTP Request
///
/// `PUT /users/{id}`
///
/// # Response
///
/// - `200 OK` - the updated user
/// - `400 Bad Request` - validation failed
/// - `403 Forbidden` - acting role lacks privilege
/// - `404 Not Found` - unknown id, or the user was already soft-deleted
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> RestResult<Response>
where
    S: UserStore + Send + Sync,
{
    state.require_admin(&request.user_role)?;

    // Tombstoned users reject edits the same way unknown ids do.
    let existing = state
        .store()
        .read(id)
        .await?
        .filter(|u| !u.is_deleted)
        .ok_or_else(|| RestError::NotFound { id: id.to_string() })?;

    let candidate = CandidateUser {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        contact: request.contact.clone(),
        email: existing.email.clone(),
        address: request.address.clone(),
        password: String::new(),
    };
    let errors = validate(&candidate, false);
    if !errors.is_empty() {
        return Err(RestError::Validation { errors });
    }

    let updated = state
        .store()
        .update(
            id,
            UserUpdate {
                first_name: request.first_name,
                last_name: request.last_name,
                contact: request.contact,
                address: request.address,
                role: request.role,
            },
        )
        .await?;

    debug!(id = %id, "User updated");
    Ok(Json(updated).into_response())
}
