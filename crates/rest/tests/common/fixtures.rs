//! Test fixtures: request payloads and CSV files.

use serde_json::{Value, json};

/// The template header, reused by CSV fixtures.
pub const CSV_HEADER: &str = "First Name,Last Name,Contact,Email,Address,Password";

/// A fully valid create payload acting as admin.
pub fn valid_user_payload(email: &str) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "contact": "9876543210",
        "email": email,
        "address": "12 Analytical Row",
        "password": "Engine@42",
        "user_role": "admin"
    })
}

/// A CSV file body from data-row lines (header prepended).
pub fn csv_file(rows: &[&str]) -> String {
    let mut file = String::from(CSV_HEADER);
    for row in rows {
        file.push('\n');
        file.push_str(row);
    }
    file
}

/// A valid CSV data row for the given email.
pub fn csv_row(first: &str, email: &str) -> String {
    format!("{first},Lovelace,9876543210,{email},12 Analytical Row,Engine@42")
}
