//! Soft-delete handler.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_persistence::core::UserStore;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::RestResult;
use crate::state::AppState;

/// Body carrying only the acting role.
#[derive(Debug, Deserialize)]
pub struct ActorPayload {
    /// The acting role.
    #[serde(default)]
    pub user_role: String,
}

/// Handler for the delete operation.
///
/// Sets a tombstone flag rather than removing the row; the user disappears
/// from listings but their email keeps occupying the uniqueness namespace.
///
/// # HTTP Request
///
/// `DELETE /users/{id}`
///
/// # Response
///
/// - `204 No Content` - user soft-deleted
/// - `403 Forbidden` - acting role lacks privilege
/// - `404 Not Found` - unknown id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ActorPayload>,
) -> RestResult<Response>
where
    S: UserStore + Send + Sync,
{
    state.require_admin(&payload.user_role)?;

    state.store().soft_delete(id).await?;

    debug!(id = %id, "User soft-deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}
