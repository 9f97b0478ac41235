//! Bulk import handlers: template download and bulk upload.
//!
//! The upload handler drives the whole pipeline from `roster-import`:
//! ingest, partition, submit, report. Per-row problems come back as rows of
//! the report; only attempt-level problems (bad file, missing privilege,
//! store failure) produce error responses.

use axum::{
    Json,
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};
use roster_import::{TEMPLATE_FILE_NAME, parse, submit_valid, write_template};
use roster_persistence::core::{BulkUserInsert, UserStore};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the template download.
///
/// # HTTP Request
///
/// `GET /users/bulk-upload/template`
///
/// # Response
///
/// `200 OK` with a CSV attachment carrying the exact required header and two
/// illustrative example rows.
pub async fn template_handler() -> RestResult<Response> {
    let mut buffer = Vec::new();
    write_template(&mut buffer).map_err(|e| RestError::InternalError {
        message: format!("Failed to build template: {}", e),
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", TEMPLATE_FILE_NAME),
            ),
        ],
        buffer,
    )
        .into_response())
}

/// Handler for the bulk upload.
///
/// # HTTP Request
///
/// `POST /users/bulk-upload` as `multipart/form-data` with two parts:
///
/// - `role` - the acting role
/// - `file` - the CSV file
///
/// # Response
///
/// - `200 OK` - the bulk report: `successful`, `failed`, and `summary`
///   buckets in which every ingested row appears exactly once with its
///   original row number
/// - `400 Bad Request` - missing part, unparsable file, missing columns, or
///   no data rows
/// - `403 Forbidden` - acting role lacks privilege (checked before the file
///   is parsed)
/// - `500 Internal Server Error` - the store failed the whole batch; no
///   partial report is produced
pub async fn bulk_upload_handler<S>(
    State(state): State<AppState<S>>,
    mut multipart: Multipart,
) -> RestResult<Response>
where
    S: UserStore + BulkUserInsert + Send + Sync,
{
    let mut role: Option<String> = None;
    let mut file: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        RestError::BadRequest {
            message: format!("Invalid multipart request: {}", e),
        }
    })? {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("role") => {
                role = Some(field.text().await.map_err(|e| RestError::BadRequest {
                    message: format!("Invalid role field: {}", e),
                })?);
            }
            Some("file") => {
                file = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| RestError::BadRequest {
                            message: format!("Invalid file field: {}", e),
                        })?
                        .to_vec(),
                );
            }
            _ => {}
        }
    }

    let role = role.ok_or_else(|| RestError::BadRequest {
        message: "Missing 'role' field".to_string(),
    })?;
    let file = file.ok_or_else(|| RestError::BadRequest {
        message: "Missing 'file' field".to_string(),
    })?;

    // Privilege gate before the file is even parsed; the coordinator checks
    // again before the store is touched.
    state.require_admin(&role)?;

    let partitioned = parse(file.as_slice())?;
    debug!(
        valid = partitioned.valid.len(),
        invalid = partitioned.invalid.len(),
        "Bulk upload partitioned"
    );

    let report = submit_valid(state.store(), partitioned, state.role_of(&role)).await?;
    Ok(Json(report).into_response())
}
