//! Pagination extractor.
//!
//! Extracts and validates `_count` and `_offset` query parameters. The
//! extractor applies the crate-wide defaults; handlers clamp `count` against
//! the configured maximum page size.

use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
};
use serde::Deserialize;

/// Axum extractor for pagination parameters.
///
/// # Example
///
/// ```rust,ignore
/// use roster_rest::extractors::Pagination;
///
/// async fn list_handler(pagination: Pagination) {
///     let page_size = pagination.count();
///     let offset = pagination.offset();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Pagination {
    /// Page size (number of items to return), if requested.
    count: Option<usize>,
    /// Offset (number of items to skip).
    offset: usize,
}

/// Query parameters for pagination.
#[derive(Debug, Deserialize)]
struct PaginationQuery {
    #[serde(rename = "_count")]
    count: Option<usize>,
    #[serde(rename = "_offset")]
    offset: Option<usize>,
}

impl Pagination {
    /// Creates a new Pagination with the given values.
    pub fn new(count: Option<usize>, offset: usize) -> Self {
        Self { count, offset }
    }

    /// Returns the requested page size, if any.
    pub fn count(&self) -> Option<usize> {
        self.count
    }

    /// Returns the requested page size clamped to `[1, max]`, falling back
    /// to `default` when the client did not ask for one.
    pub fn count_clamped(&self, default: usize, max: usize) -> usize {
        self.count.unwrap_or(default).clamp(1, max)
    }

    /// Returns the offset.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            count: None,
            offset: 0,
        }
    }
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid pagination parameters"))?;

        Ok(Pagination::new(query.count, query.offset.unwrap_or(0)))
    }
}
