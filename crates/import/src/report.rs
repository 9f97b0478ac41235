//! The bulk report - the terminal artifact of an import attempt.
//!
//! Every ingested row appears in exactly one of `successful` or `failed`,
//! with its original data and spreadsheet row number, so a user can locate
//! and fix any problem row without re-deriving which rows went through.
//! Candidate passwords are carried internally but never serialized (see
//! `roster_model::CandidateUser`).

use serde::Serialize;
use uuid::Uuid;

use roster_model::CandidateUser;

/// One row of the report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    /// Original spreadsheet row number.
    pub row: u32,
    /// The candidate data as ingested (password omitted on serialization).
    pub data: CandidateUser,
    /// Server-assigned identifier; present only for accepted rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    /// Failure detail: the store's rejection reason, or the validation
    /// violation list. Empty for accepted rows.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ReportRow {
    /// An accepted row with its new identifier.
    pub fn accepted(row: u32, data: CandidateUser, user_id: Uuid) -> Self {
        Self {
            row,
            data,
            user_id: Some(user_id),
            errors: Vec::new(),
        }
    }

    /// A failed row with its reasons.
    pub fn failed(row: u32, data: CandidateUser, errors: Vec<String>) -> Self {
        Self {
            row,
            data,
            user_id: None,
            errors,
        }
    }
}

/// Headline counts of an import attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BulkSummary {
    /// Rows ingested: `success + failed`.
    pub total: usize,
    /// Rows accepted by the store.
    pub success: usize,
    /// Rows that failed anywhere: store rejects plus validation rejects.
    pub failed: usize,
}

/// The merged success/failure report returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct BulkReport {
    /// Accepted rows, in store response order.
    pub successful: Vec<ReportRow>,
    /// Failed rows: store rejects first (response order), then rows that
    /// never reached submission (original row order).
    pub failed: Vec<ReportRow>,
    /// Headline counts.
    pub summary: BulkSummary,
}
