//! Active/inactive toggle handler.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use roster_persistence::core::UserStore;
use tracing::debug;
use uuid::Uuid;

use crate::error::RestResult;
use crate::handlers::delete::ActorPayload;
use crate::state::AppState;

/// Handler for the status-toggle operation.
///
/// # HTTP Request
///
/// `PATCH /users/status/{id}`
///
/// # Response
///
/// - `200 OK` - `{ "is_active": bool }` with the new value
/// - `403 Forbidden` - acting role lacks privilege
/// - `404 Not Found` - unknown id or tombstoned
pub async fn status_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ActorPayload>,
) -> RestResult<Response>
where
    S: UserStore + Send + Sync,
{
    state.require_admin(&payload.user_role)?;

    let is_active = state.store().toggle_status(id).await?;

    debug!(id = %id, is_active, "User status toggled");
    Ok(Json(serde_json::json!({ "is_active": is_active })).into_response())
}
