//! Batch partitioning.
//!
//! Runs the field validator over every ingested row and splits the sequence
//! into valid and invalid subsets. The partition is stable - each subset
//! keeps the original ingestion order - and performs no I/O.

use tracing::debug;

use crate::ingest::TaggedRow;
use crate::validate::validate;

/// A row that failed validation, with its ordered violation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// The row-tagged candidate as ingested.
    pub row: TaggedRow,
    /// The violated rules, in rule order; never empty.
    pub errors: Vec<String>,
}

/// The output of partitioning: two disjoint subsets whose union is every
/// ingested row.
#[derive(Debug, Clone, Default)]
pub struct Partitioned {
    /// Rows with zero violations, in ingestion order.
    pub valid: Vec<TaggedRow>,
    /// Rows with one or more violations, in ingestion order.
    pub invalid: Vec<RejectedRow>,
}

impl Partitioned {
    /// Number of rows ingested, i.e. `valid + invalid`.
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}

/// Validates every row and splits the sequence.
///
/// Bulk import always requires a password per record, independent of the
/// acting user, so the validator runs with `require_password = true`.
/// Deterministic given the same input rows.
pub fn partition(rows: Vec<TaggedRow>) -> Partitioned {
    let mut partitioned = Partitioned::default();

    for row in rows {
        let errors = validate(&row.record, true);
        if errors.is_empty() {
            partitioned.valid.push(row);
        } else {
            partitioned.invalid.push(RejectedRow { row, errors });
        }
    }

    debug!(
        valid = partitioned.valid.len(),
        invalid = partitioned.invalid.len(),
        "Rows partitioned"
    );
    partitioned
}
