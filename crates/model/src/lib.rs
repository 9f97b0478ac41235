//! # roster-model - Domain Types
//!
//! Shared domain types for the Roster user-administration service. Every
//! other crate in the workspace builds on these:
//!
//! - [`CandidateUser`] - an unpersisted registration attempt (form input or
//!   one spreadsheet row), carrying the six free-text fields prior to
//!   validation
//! - [`StoredUser`] - a persisted user record with its server-assigned
//!   identifier and lifecycle flags
//! - [`UserUpdate`] - the subset of fields an edit is allowed to change
//! - [`Role`] - the client-supplied actor role used for privilege checks
//!
//! Passwords are write-only throughout: [`CandidateUser`] accepts one on the
//! way in but never serializes it back out, and [`StoredUser`] does not carry
//! one at all.

pub mod role;
pub mod user;

pub use role::Role;
pub use user::{CandidateUser, StoredUser, UserUpdate};
