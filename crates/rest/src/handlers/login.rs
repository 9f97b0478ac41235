//! Login handler.
//!
//! A single credential check against the store. Roster has no sessions or
//! tokens - the dashboard keeps the returned user record and sends its role
//! back with every privileged request.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_persistence::core::UserStore;
use serde::Deserialize;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Handler for the login operation.
///
/// # HTTP Request
///
/// `POST /login`
///
/// # Response
///
/// - `200 OK` - the matching user record (passwords are never serialized)
/// - `401 Unauthorized` - no non-deleted user matches the credentials
pub async fn login_handler<S>(
    State(state): State<AppState<S>>,
    Json(request): Json<LoginRequest>,
) -> RestResult<Response>
where
    S: UserStore + Send + Sync,
{
    debug!(email = %request.email, "Processing login request");

    let user = state
        .store()
        .find_by_credentials(request.email.trim(), &request.password)
        .await?;

    match user {
        Some(user) => {
            debug!(id = %user.id, "Login succeeded");
            Ok((StatusCode::OK, Json(user)).into_response())
        }
        None => Err(RestError::Unauthorized {
            message: "Invalid email or password".to_string(),
        }),
    }
}
