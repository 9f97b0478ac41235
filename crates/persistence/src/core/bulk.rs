//! Batch-insert contract for bulk imports.
//!
//! The bulk import workflow submits its entire valid set as one
//! [`BulkUserInsert::insert_batch`] call and receives one outcome per
//! submitted record. The contract is deliberately narrow and strictly
//! positional:
//!
//! - The response has the same length and order as the request. Position in
//!   the sequence is the **only** correlation key; the store knows nothing
//!   about spreadsheet row numbers. Mapping batch position back to the
//!   original row number is owned entirely by the submission coordinator.
//! - Each record inserts independently. A rejected record (typically a
//!   duplicate email, whether pre-existing or earlier in the same batch)
//!   never aborts its siblings.
//! - Only a whole-batch failure (connection loss, SQL failure unrelated to
//!   constraints) returns `Err`; in that case no partial outcome list is
//!   produced.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use roster_model::CandidateUser;

use crate::error::StorageResult;

/// Per-record outcome of a batch insert, positional with the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchRowOutcome {
    /// The record was inserted; carries the server-assigned identifier.
    Accepted {
        /// Identifier of the new user.
        user_id: Uuid,
    },
    /// The record was rejected; its siblings are unaffected.
    Rejected {
        /// Human-readable reason, e.g. "Email already exists".
        reason: String,
    },
}

impl BatchRowOutcome {
    /// True for [`BatchRowOutcome::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, BatchRowOutcome::Accepted { .. })
    }
}

/// Batch-insert half of the persistence boundary.
#[async_trait]
pub trait BulkUserInsert: Send + Sync {
    /// Attempts to insert every candidate independently, in request order.
    ///
    /// Returns one [`BatchRowOutcome`] per candidate, same length and order
    /// as the input. See the module docs for the positional-correlation
    /// contract.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend` - the batch as a whole could not be
    ///   processed; no per-row outcomes exist in this case
    async fn insert_batch(
        &self,
        candidates: Vec<CandidateUser>,
    ) -> StorageResult<Vec<BatchRowOutcome>>;
}
