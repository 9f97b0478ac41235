//! Error types for the Roster REST API.
//!
//! This module defines all error types used throughout the REST layer, with
//! automatic conversion to JSON error responses.
//!
//! # Error Mapping
//!
//! Errors from the persistence layer and the import pipeline are mapped to
//! HTTP status codes:
//!
//! | Source error | HTTP Status |
//! |--------------|-------------|
//! | `ResourceError::NotFound` / `Gone` | 404 |
//! | `ConstraintError::DuplicateEmail` | 409 |
//! | `BackendError` | 500 |
//! | `IngestError` (parse / columns / empty) | 400 |
//! | `SubmitError::Forbidden` | 403 |
//! | `SubmitError::OutcomeCountMismatch` | 500 |
//!
//! Row-level failures inside a bulk upload never pass through here - they are
//! data in the report, not errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_import::{IngestError, SubmitError};
use roster_persistence::error::{
    BackendError, ConstraintError, ResourceError, StorageError,
};
use std::fmt;

/// The primary error type for REST API operations.
///
/// Variants map one-to-one to HTTP status codes; the response body is always
/// `{"error": "..."}`, with validation failures additionally carrying an
/// `"errors"` array so the client can show every violated rule.
#[derive(Debug)]
pub enum RestError {
    /// User not found, or already tombstoned (HTTP 404).
    NotFound {
        /// The user identifier.
        id: String,
    },

    /// Malformed request (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Business-rule validation failed (HTTP 400).
    Validation {
        /// The violated rules, in rule order.
        errors: Vec<String>,
    },

    /// Credential check failed (HTTP 401).
    Unauthorized {
        /// Error message.
        message: String,
    },

    /// Acting role lacks privilege (HTTP 403).
    Forbidden {
        /// Error message.
        message: String,
    },

    /// Duplicate email (HTTP 409).
    Conflict {
        /// Error message.
        message: String,
    },

    /// Not implemented / not configured (HTTP 501).
    NotImplemented {
        /// Description of the missing feature.
        feature: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => write!(f, "User not found: {}", id),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::Validation { errors } => {
                write!(f, "Validation failed: {}", errors.join(", "))
            }
            RestError::Unauthorized { message } => write!(f, "Unauthorized: {}", message),
            RestError::Forbidden { message } => write!(f, "Forbidden: {}", message),
            RestError::Conflict { message } => write!(f, "Conflict: {}", message),
            RestError::NotImplemented { feature } => write!(f, "Not implemented: {}", feature),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            RestError::NotFound { id } => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": format!("User {} not found", id) }),
            ),
            RestError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": message }),
            ),
            RestError::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": errors.join(", "),
                    "errors": errors,
                }),
            ),
            RestError::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({ "error": message }),
            ),
            RestError::Forbidden { message } => (
                StatusCode::FORBIDDEN,
                serde_json::json!({ "error": message }),
            ),
            RestError::Conflict { message } => (
                StatusCode::CONFLICT,
                serde_json::json!({ "error": message }),
            ),
            RestError::NotImplemented { feature } => (
                StatusCode::NOT_IMPLEMENTED,
                serde_json::json!({ "error": format!("Not implemented: {}", feature) }),
            ),
            RestError::InternalError { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// Implement conversions from storage and import errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(ResourceError::NotFound { id }) => RestError::NotFound { id },
            StorageError::Resource(ResourceError::Gone { id, .. }) => RestError::NotFound { id },
            StorageError::Constraint(ConstraintError::DuplicateEmail { .. }) => {
                RestError::Conflict {
                    message: "Email already exists".to_string(),
                }
            }
            StorageError::Backend(e) => RestError::from(e),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

impl From<IngestError> for RestError {
    fn from(err: IngestError) -> Self {
        // All three are fatal to the attempt and the user's to fix.
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<SubmitError> for RestError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Forbidden { .. } => RestError::Forbidden {
                message: "Access denied: admin only".to_string(),
            },
            SubmitError::OutcomeCountMismatch { .. } => RestError::InternalError {
                message: err.to_string(),
            },
            SubmitError::Store(e) => e.into(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound {
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "User not found: abc");
    }

    #[test]
    fn test_validation_display_joins_errors() {
        let err = RestError::Validation {
            errors: vec!["first name required".to_string(), "email required".to_string()],
        };
        assert!(err.to_string().contains("first name required, email required"));
    }

    #[test]
    fn test_duplicate_email_maps_to_conflict() {
        let err: RestError = StorageError::Constraint(ConstraintError::DuplicateEmail {
            email: "a@gmail.com".to_string(),
        })
        .into();
        assert!(matches!(err, RestError::Conflict { .. }));
    }

    #[test]
    fn test_not_found_maps_from_storage() {
        let err: RestError = StorageError::Resource(ResourceError::NotFound {
            id: "x".to_string(),
        })
        .into();
        assert!(matches!(err, RestError::NotFound { .. }));
    }

    #[test]
    fn test_submit_forbidden_maps_to_forbidden() {
        let err: RestError = SubmitError::Forbidden {
            role: roster_model::Role::User,
        }
        .into();
        assert!(matches!(err, RestError::Forbidden { .. }));
    }

    #[test]
    fn test_ingest_error_maps_to_bad_request() {
        let err: RestError = IngestError::Empty.into();
        assert!(matches!(err, RestError::BadRequest { .. }));
    }
}
