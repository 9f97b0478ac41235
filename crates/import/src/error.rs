//! Error types for the ingestion step.
//!
//! All three variants are fatal to the ingestion attempt - the user fixes
//! the file and re-uploads. Row-level validation problems are not errors;
//! they are data carried in [`crate::partition::Partitioned::invalid`].

use thiserror::Error;

/// Reasons an uploaded file cannot be ingested.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The file could not be decoded as tabular data.
    #[error("failed to parse file as CSV: {0}")]
    Parse(#[from] csv::Error),

    /// The header row lacks one or more required columns. Carries the
    /// canonical names of the missing columns so the user can fix the file
    /// without guessing.
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Header only, or no rows at all.
    #[error("file contains no data rows")]
    Empty,
}
