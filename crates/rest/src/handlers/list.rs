//! User listing handler.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use roster_persistence::core::UserStore;
use roster_persistence::types::UserQuery;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{ListParams, Pagination};
use crate::state::AppState;

/// Handler for the listing operation.
///
/// # HTTP Request
///
/// `GET /users?search=&status=&sort_by=&order=&_count=&_offset=`
///
/// # Response
///
/// `200 OK` with `{ "users": [...], "total": n }` where `total` counts every
/// matching row, ignoring pagination. Soft-deleted users never appear.
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    params: ListParams,
    pagination: Pagination,
) -> RestResult<Response>
where
    S: UserStore + Send + Sync,
{
    let query = UserQuery {
        search: params.search,
        status: params.status,
        sort_by: params.sort_by,
        order: params.order,
        offset: pagination.offset(),
        limit: Some(pagination.count_clamped(state.default_page_size(), state.max_page_size())),
    };

    debug!(?query, "Processing list request");

    let page = state.store().list(&query).await?;
    Ok(Json(page).into_response())
}
