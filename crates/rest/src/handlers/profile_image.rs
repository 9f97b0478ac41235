//! Profile image upload handler.
//!
//! Images arrive as base64 data URLs, the way the dashboard reads files
//! client-side, and are stored verbatim. The handler enforces the image
//! media type and a 2 MiB decoded-size cap.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use roster_persistence::core::UserStore;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Maximum decoded image size.
const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Profile image request body.
#[derive(Debug, Deserialize)]
pub struct ProfileImageRequest {
    /// A `data:image/...;base64,` URL.
    pub profile_image: String,
}

/// Handler for the profile-image operation.
///
/// Users update their own image, so no role check applies here.
///
/// # HTTP Request
///
/// `PATCH /users/{id}/profile-image`
///
/// # Response
///
/// - `204 No Content` - image stored
/// - `400 Bad Request` - not an image data URL, undecodable, or over 2 MiB
/// - `404 Not Found` - unknown id or tombstoned
pub async fn profile_image_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
    Json(request): Json<ProfileImageRequest>,
) -> RestResult<Response>
where
    S: UserStore + Send + Sync,
{
    let data_url = request.profile_image.as_str();

    let payload = data_url
        .strip_prefix("data:image/")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload)
        .ok_or_else(|| RestError::BadRequest {
            message: "Profile image must be a base64 image data URL".to_string(),
        })?;

    let decoded = STANDARD.decode(payload).map_err(|_| RestError::BadRequest {
        message: "Profile image is not valid base64".to_string(),
    })?;
    if decoded.len() > MAX_IMAGE_BYTES {
        return Err(RestError::BadRequest {
            message: "Profile image must be smaller than 2MB".to_string(),
        });
    }

    state.store().set_profile_image(id, data_url).await?;

    debug!(id = %id, bytes = decoded.len(), "Profile image stored");
    Ok(StatusCode::NO_CONTENT.into_response())
}
