//! Error types for the persistence layer.
//!
//! The hierarchy separates resource-state errors (missing or tombstoned
//! records), constraint violations (the unique email index), and
//! backend-level failures (pool exhaustion, SQL errors). Row-level outcomes
//! of a batch insert are *not* errors - see
//! [`crate::core::BatchRowOutcome`]; only whole-batch failures surface here.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Database constraint violations
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to the state of an individual user record.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// No user with the given identifier (or the record is tombstoned, in
    /// which case it is treated as absent for mutation purposes).
    #[error("user not found: {id}")]
    NotFound { id: String },

    /// The user was soft-deleted.
    #[error("user deleted: {id}")]
    Gone {
        id: String,
        deleted_at: Option<chrono::DateTime<chrono::Utc>>,
    },
}

/// Constraint violations reported by the database.
#[derive(Error, Debug)]
pub enum ConstraintError {
    /// The unique email index rejected an insert.
    #[error("email already exists: {email}")]
    DuplicateEmail { email: String },
}

/// Backend-level failures.
///
/// These are fatal to the operation that hit them; for a batch insert they
/// abort the whole batch with no partial report.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Could not obtain a connection from the pool.
    #[error("{backend_name}: connection failed: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// A query or statement failed for a non-constraint reason.
    #[error("{backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
    },

    /// Stored data could not be decoded into domain types.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// True when the error is the unique-email constraint, which a batch
    /// insert downgrades to a row-level rejection.
    pub fn is_duplicate_email(&self) -> bool {
        matches!(
            self,
            StorageError::Constraint(ConstraintError::DuplicateEmail { .. })
        )
    }
}
