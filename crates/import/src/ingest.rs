//! Spreadsheet ingestion.
//!
//! Decodes an uploaded CSV file into an ordered sequence of row-tagged
//! candidates. Ingestion is purely structural - it checks that the header
//! carries the required columns and that data rows exist, but runs no
//! business rules; those belong to [`crate::validate`].

use std::collections::HashMap;
use std::io::Read;

use csv::ReaderBuilder;
use tracing::debug;

use roster_model::CandidateUser;

use crate::error::IngestError;

/// The required header columns, in template order. Matching is case- and
/// whitespace-insensitive; these canonical names are used when reporting
/// missing columns.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "First Name",
    "Last Name",
    "Contact",
    "Email",
    "Address",
    "Password",
];

/// A candidate paired with its original spreadsheet row number.
///
/// The header is row 1, so the first data row is row 2. The number is
/// assigned here and carried through validation, submission, and reporting
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRow {
    /// Original 1-based spreadsheet row (header offset included).
    pub row: u32,
    /// The raw field values; blank cells are empty strings, never absent.
    pub record: CandidateUser,
}

fn normalize(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Parses CSV bytes into row-tagged candidates.
///
/// # Errors
///
/// * [`IngestError::Parse`] - the bytes are not decodable as CSV
/// * [`IngestError::MissingColumns`] - the header lacks required columns;
///   the missing set is reported
/// * [`IngestError::Empty`] - no header, or header with zero data rows
pub fn ingest<R: Read>(reader: R) -> Result<Vec<TaggedRow>, IngestError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::Empty);
    }

    let mut positions: HashMap<String, usize> = HashMap::new();
    for (index, header) in headers.iter().enumerate() {
        positions.entry(normalize(header)).or_insert(index);
    }

    let mut column_indexes = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing = Vec::new();
    for (slot, column) in REQUIRED_COLUMNS.iter().enumerate() {
        match positions.get(&normalize(column)) {
            Some(&index) => column_indexes[slot] = index,
            None => missing.push(column.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns(missing));
    }

    let mut rows = Vec::new();
    for (offset, result) in csv_reader.records().enumerate() {
        let record = result?;
        let field = |slot: usize| record.get(column_indexes[slot]).unwrap_or("").to_string();

        rows.push(TaggedRow {
            // Header is row 1; data rows start at 2.
            row: offset as u32 + 2,
            record: CandidateUser {
                first_name: field(0),
                last_name: field(1),
                contact: field(2),
                email: field(3),
                address: field(4),
                password: field(5),
            },
        });
    }

    if rows.is_empty() {
        return Err(IngestError::Empty);
    }

    debug!(rows = rows.len(), "File ingested");
    Ok(rows)
}
