//! User record types.
//!
//! [`CandidateUser`] is the transient shape: what a registration form or one
//! spreadsheet row holds before validation. All six fields are always present
//! as (possibly empty) strings - ingestion fills blanks with `""` so that
//! downstream code never branches on missing fields. [`StoredUser`] is the
//! persisted shape with identity and lifecycle flags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::Role;

/// An unpersisted, user-supplied set of registration fields awaiting
/// validation.
///
/// The `password` field deserializes from incoming payloads but is never
/// serialized back out - reports and API responses echo candidate data
/// without it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateUser {
    /// Given name, at most 50 characters once validated.
    pub first_name: String,
    /// Family name, at most 50 characters once validated.
    pub last_name: String,
    /// Contact number, exactly 10 decimal digits once validated.
    pub contact: String,
    /// Email address, restricted to the `gmail.com` domain.
    pub email: String,
    /// Free-text postal address.
    pub address: String,
    /// Plaintext password; write-only.
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl CandidateUser {
    /// Builds a candidate from raw field values, trimming nothing - the
    /// validator decides what whitespace means.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        contact: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            contact: contact.into(),
            email: email.into(),
            address: address.into(),
            password: password.into(),
        }
    }
}

/// A persisted user record.
///
/// The identifier is opaque to callers; it is assigned by the store on
/// insert and never reused. Soft deletion sets `is_deleted` rather than
/// removing the row, so identifiers stay resolvable for audit purposes even
/// after deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    /// Server-assigned opaque identifier.
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    /// Assigned role; defaults to [`Role::User`] on creation.
    pub role: Role,
    /// Profile image as a `data:image/...;base64,` URL, if one was uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Active/inactive toggle; new users start active.
    pub is_active: bool,
    /// Tombstone flag; soft-deleted users are excluded from listings.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl StoredUser {
    /// Display name in "First Last" form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields an edit may change.
///
/// Email is immutable once assigned (it is the uniqueness key) and passwords
/// are not editable through the update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub address: String,
    /// Optional role change; `None` leaves the stored role untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}
