//! The downloadable import template.
//!
//! A CSV file with the exact required header and two illustrative example
//! rows. The examples are not validated - they only show users what the
//! columns mean.

use std::io::Write;

use crate::error::IngestError;
use crate::ingest::REQUIRED_COLUMNS;

/// Suggested filename for the downloaded template.
pub const TEMPLATE_FILE_NAME: &str = "bulk_upload_template.csv";

/// Writes the template CSV to `writer`.
pub fn write_template<W: Write>(writer: W) -> Result<(), IngestError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(REQUIRED_COLUMNS)?;
    csv_writer.write_record([
        "John",
        "Doe",
        "9876543210",
        "john@gmail.com",
        "123 Main St",
        "Pass@123",
    ])?;
    csv_writer.write_record([
        "Jane",
        "Smith",
        "9876543211",
        "jane@gmail.com",
        "456 Oak Ave",
        "Test@456",
    ])?;
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ingest::ingest;
    use crate::partition::partition;

    #[test]
    fn test_template_header_is_exact() {
        let mut buffer = Vec::new();
        write_template(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("First Name,Last Name,Contact,Email,Address,Password\n"));
    }

    #[test]
    fn test_template_round_trips_through_the_pipeline() {
        let mut buffer = Vec::new();
        write_template(&mut buffer).unwrap();

        let rows = ingest(buffer.as_slice()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 2);

        // The example rows happen to satisfy the business rules.
        let partitioned = partition(rows);
        assert_eq!(partitioned.invalid.len(), 0);
    }
}
