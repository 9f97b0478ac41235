//! Field validation rules for candidate users.
//!
//! These are Roster's fixed business rules, applied identically by the
//! single-record create endpoint and the bulk import pipeline. The rules are
//! not configurable.
//!
//! Checks run in a fixed order and their messages come back in that order:
//!
//! 1. Presence of every required field (trimmed). Missing fields
//!    short-circuit: format checks on absent data are meaningless, so the
//!    caller gets only the missing-field messages.
//! 2. Name length (first and last, 50 characters each).
//! 3. Contact format (exactly 10 decimal digits) and email format
//!    (`gmail.com` addresses only).
//! 4. Password complexity, when a password is required.
//!
//! Steps 2-4 accumulate: a record with several format problems reports all
//! of them in one call.

use std::sync::LazyLock;

use regex::Regex;

use roster_model::CandidateUser;

/// Maximum length of first and last names, in characters.
pub const MAX_NAME_LEN: usize = 50;

static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("contact regex is valid"));

// Local part per the usual address grammar; domain pinned to gmail.com.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@gmail\.com$").expect("email regex is valid"));

/// The accepted "special" characters for passwords. Nothing else counts.
const PASSWORD_SPECIALS: [char; 4] = ['#', '@', '$', '&'];

/// Validates a candidate against the fixed business rules.
///
/// Returns the violated rules as human-readable messages, in rule order; an
/// empty list means the candidate is valid. `require_password` is true for
/// bulk imports and single-record creation, false when editing an existing
/// user (passwords are not editable).
///
/// Deterministic: identical input always yields identical output.
pub fn validate(record: &CandidateUser, require_password: bool) -> Vec<String> {
    let mut errors = Vec::new();

    let first_name = record.first_name.trim();
    let last_name = record.last_name.trim();
    let contact = record.contact.trim();
    let email = record.email.trim();
    let address = record.address.trim();
    let password = record.password.trim();

    let mut required: Vec<(&str, &str)> = vec![
        ("first name", first_name),
        ("last name", last_name),
        ("contact", contact),
        ("email", email),
        ("address", address),
    ];
    if require_password {
        required.push(("password", password));
    }
    for (label, value) in required {
        if value.is_empty() {
            errors.push(format!("{} required", label));
        }
    }
    // Format checks on absent data are meaningless; stop here.
    if !errors.is_empty() {
        return errors;
    }

    if first_name.chars().count() > MAX_NAME_LEN {
        errors.push(format!("First name max {} chars", MAX_NAME_LEN));
    }
    if last_name.chars().count() > MAX_NAME_LEN {
        errors.push(format!("Last name max {} chars", MAX_NAME_LEN));
    }
    if !CONTACT_RE.is_match(contact) {
        errors.push("Contact must be exactly 10 digits".to_string());
    }
    if !EMAIL_RE.is_match(email) {
        errors.push("Email must be a valid @gmail.com address".to_string());
    }
    if require_password && !password_ok(password) {
        errors.push(
            "Password must be 8-12 chars with upper, lower, number and special (# @ $ &)"
                .to_string(),
        );
    }

    errors
}

/// Length 8-12 with at least one uppercase, one lowercase, one digit, and
/// one character from [`PASSWORD_SPECIALS`].
fn password_ok(password: &str) -> bool {
    let len = password.chars().count();
    if !(8..=12).contains(&len) {
        return false;
    }
    password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(&c))
}
