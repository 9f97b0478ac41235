//! # roster-import - Bulk Import Pipeline
//!
//! This crate implements Roster's bulk-upload reconciliation workflow: an
//! uploaded spreadsheet of candidate users is parsed, validated row by row,
//! partitioned into valid and invalid sets, and the valid subset is submitted
//! to the persistence boundary in one batch. Per-row outcomes from the store
//! are merged with the rows that failed validation into a single report.
//!
//! ## Pipeline
//!
//! ```text
//! file bytes
//!    │ ingest()                    ParseError / SchemaError / EmptyInputError
//!    ▼
//! Vec<TaggedRow>                   row numbers assigned once, never changed
//!    │ partition()                 validate() with password required
//!    ▼
//! Partitioned { valid, invalid }
//!    │ submit_valid()              authorization gate, then one batch insert
//!    ▼
//! BulkReport { successful, failed, summary }
//! ```
//!
//! ## Row numbers
//!
//! Rows are tagged with their original spreadsheet position at ingestion:
//! the header is row 1, so the first data row is row 2. That number is
//! carried through partitioning, submission, and reporting unchanged - a
//! user reads "Row 7 failed" in the report and finds the problem on row 7 of
//! the file they uploaded.
//!
//! ## Failure semantics
//!
//! Row-level problems (validation violations, duplicate emails) are data:
//! they flow into the report and never abort sibling rows. Attempt-level
//! problems (unreadable file, missing columns, missing privilege, a store
//! that fails the whole batch) are errors and abort the current step.
//!
//! ## Example
//!
//! ```rust,ignore
//! use roster_import::{parse, submit_valid};
//! use roster_model::Role;
//!
//! # async fn example(store: &impl roster_persistence::core::BulkUserInsert)
//! # -> Result<(), Box<dyn std::error::Error>> {
//! let file = std::fs::File::open("users.csv")?;
//! let partitioned = parse(file)?;
//! let report = submit_valid(store, partitioned, Role::Admin).await?;
//! println!(
//!     "{} imported, {} failed of {}",
//!     report.summary.success, report.summary.failed, report.summary.total
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod ingest;
pub mod partition;
pub mod report;
pub mod submit;
pub mod template;
pub mod validate;

pub use error::IngestError;
pub use ingest::{REQUIRED_COLUMNS, TaggedRow, ingest};
pub use partition::{Partitioned, RejectedRow, partition};
pub use report::{BulkReport, BulkSummary, ReportRow};
pub use submit::{SubmitError, submit_valid};
pub use template::{TEMPLATE_FILE_NAME, write_template};
pub use validate::validate;

use std::io::Read;

/// Parses and partitions an uploaded file in one step: [`ingest`] followed
/// by [`partition`]. This is the first half of the workflow; the second half
/// is [`submit_valid`].
pub fn parse<R: Read>(reader: R) -> Result<Partitioned, IngestError> {
    Ok(partition(ingest(reader)?))
}
