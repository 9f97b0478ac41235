//! Listing parameter extractor.
//!
//! Extracts the search, status-filter, and sort controls of the users
//! listing from query parameters.

use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
};
use serde::Deserialize;

use roster_persistence::types::{SortField, SortOrder, StatusFilter};

/// Axum extractor for the listing controls.
///
/// Recognized query parameters:
///
/// - `search` - case-insensitive substring across name, email, contact,
///   and address
/// - `status` - `all` (default), `active`, or `inactive`
/// - `sort_by` - `name`, `email`, `contact`, `address`, `is_active`,
///   `created_at`
/// - `order` - `asc` (default) or `desc`
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Substring search, if requested.
    pub search: Option<String>,
    /// Status filter.
    pub status: StatusFilter,
    /// Sort field; `None` means creation order.
    pub sort_by: Option<SortField>,
    /// Sort direction.
    pub order: SortOrder,
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    search: Option<String>,
    status: Option<StatusFilter>,
    sort_by: Option<SortField>,
    order: Option<SortOrder>,
}

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid listing parameters"))?;

        Ok(ListParams {
            search: query.search.filter(|s| !s.trim().is_empty()),
            status: query.status.unwrap_or_default(),
            sort_by: query.sort_by,
            order: query.order.unwrap_or_default(),
        })
    }
}
