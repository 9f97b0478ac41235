//! Bulk submission coordinator.
//!
//! Sends the valid subset of a partitioned batch to the persistence boundary
//! and merges the per-row outcomes with the rows that failed validation into
//! one [`BulkReport`].
//!
//! The store's response is strictly positional (see
//! `roster_persistence::core::bulk`): outcome *i* belongs to submitted row
//! *i*. This coordinator is the sole owner of the mapping from batch
//! position back to original spreadsheet row number, which only holds as
//! long as the request is built in `valid`-set order and never reordered or
//! partially sent.

use tracing::{debug, warn};

use roster_model::Role;
use roster_persistence::core::{BatchRowOutcome, BulkUserInsert};
use roster_persistence::error::StorageError;
use thiserror::Error;

use crate::partition::Partitioned;
use crate::report::{BulkReport, BulkSummary, ReportRow};

/// Reasons a submission attempt fails as a whole.
///
/// Per-row rejections are not here - they are data inside the report.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The acting role is not privileged. Checked before any store
    /// interaction.
    #[error("role '{role}' may not bulk-import users")]
    Forbidden {
        /// The role that was supplied.
        role: Role,
    },

    /// The store broke the positional contract; correlation is impossible,
    /// so no report is produced.
    #[error("store returned {returned} outcomes for {submitted} submitted rows")]
    OutcomeCountMismatch {
        /// Rows submitted in the batch.
        submitted: usize,
        /// Outcomes the store returned.
        returned: usize,
    },

    /// The whole batch failed at the store (connection loss, SQL failure).
    /// No partial report exists; the caller retries the workflow.
    #[error(transparent)]
    Store(#[from] StorageError),
}

/// Submits the valid subset and builds the merged report.
///
/// - Non-admin roles fail with [`SubmitError::Forbidden`] before anything
///   is sent.
/// - An empty valid set never contacts the store; the report is built from
///   the invalid set alone.
/// - Otherwise the entire valid set goes out as one `insert_batch` call.
///   Accepted rows land in `successful` with their new identifiers;
///   rejected rows land in `failed` (store order), followed by the
///   pre-validation invalids (original order).
///
/// Partial failure is the expected steady state: individual rejections never
/// fail the call.
pub async fn submit_valid<S>(
    store: &S,
    partitioned: Partitioned,
    actor_role: Role,
) -> Result<BulkReport, SubmitError>
where
    S: BulkUserInsert,
{
    if !actor_role.is_admin() {
        warn!(role = %actor_role, "Bulk import refused");
        return Err(SubmitError::Forbidden { role: actor_role });
    }

    let Partitioned { valid, invalid } = partitioned;
    let total = valid.len() + invalid.len();

    let mut successful = Vec::new();
    let mut failed = Vec::new();

    if !valid.is_empty() {
        let candidates = valid.iter().map(|r| r.record.clone()).collect::<Vec<_>>();
        let submitted = candidates.len();
        let outcomes = store.insert_batch(candidates).await?;

        if outcomes.len() != submitted {
            return Err(SubmitError::OutcomeCountMismatch {
                submitted,
                returned: outcomes.len(),
            });
        }

        // Position is the correlation key: outcome i belongs to valid[i].
        for (row, outcome) in valid.into_iter().zip(outcomes) {
            match outcome {
                BatchRowOutcome::Accepted { user_id } => {
                    successful.push(ReportRow::accepted(row.row, row.record, user_id));
                }
                BatchRowOutcome::Rejected { reason } => {
                    failed.push(ReportRow::failed(row.row, row.record, vec![reason]));
                }
            }
        }
    }

    // Pre-validation invalids follow the store rejects, keeping their own
    // violation lists and original order.
    for rejected in invalid {
        failed.push(ReportRow::failed(
            rejected.row.row,
            rejected.row.record,
            rejected.errors,
        ));
    }

    let summary = BulkSummary {
        total,
        success: successful.len(),
        failed: failed.len(),
    };
    debug!(
        total = summary.total,
        success = summary.success,
        failed = summary.failed,
        "Bulk import completed"
    );

    Ok(BulkReport {
        successful,
        failed,
        summary,
    })
}
