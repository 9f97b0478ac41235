//! Query and page types shared by all backends.

use serde::{Deserialize, Serialize};

use roster_model::StoredUser;

/// Listing query: search, filter, sort, and paginate non-deleted users.
///
/// The default query matches every non-deleted user in creation order.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Case-insensitive substring match across first name, last name, email,
    /// contact, and address (one concatenated haystack, matching the way the
    /// dashboard searches).
    pub search: Option<String>,
    /// Active/inactive filter.
    pub status: StatusFilter,
    /// Sort field; `None` means creation order.
    pub sort_by: Option<SortField>,
    /// Sort direction.
    pub order: SortOrder,
    /// Rows to skip.
    pub offset: usize,
    /// Maximum rows to return; `None` means no limit.
    pub limit: Option<usize>,
}

/// Active/inactive filter for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// No status filtering.
    #[default]
    All,
    /// Only users with the active flag set.
    Active,
    /// Only users with the active flag cleared.
    Inactive,
}

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// First name then last name, the dashboard's "Name" column.
    Name,
    Email,
    Contact,
    Address,
    IsActive,
    CreatedAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// One page of a listing, plus the total number of rows the query matched
/// (before pagination) so the caller can render page controls.
#[derive(Debug, Clone, Serialize)]
pub struct UserPage {
    /// The rows of this page, in query order.
    pub users: Vec<StoredUser>,
    /// Total matching rows, ignoring offset/limit.
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_unfiltered() {
        let query = UserQuery::default();
        assert!(query.search.is_none());
        assert_eq!(query.status, StatusFilter::All);
        assert!(query.sort_by.is_none());
        assert_eq!(query.order, SortOrder::Asc);
        assert_eq!(query.offset, 0);
        assert!(query.limit.is_none());
    }

    #[test]
    fn test_filters_deserialize() {
        let status: StatusFilter = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(status, StatusFilter::Inactive);
        let field: SortField = serde_json::from_str("\"is_active\"").unwrap();
        assert_eq!(field, SortField::IsActive);
        let order: SortOrder = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(order, SortOrder::Desc);
    }
}
