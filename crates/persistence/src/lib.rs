//! # roster-persistence - Persistence Layer
//!
//! This crate is the persistence boundary of the Roster user-administration
//! service. It defines the storage traits the HTTP layer and the bulk-import
//! pipeline are written against, the error hierarchy those traits surface,
//! and a SQLite backend.
//!
//! ## Design
//!
//! All durable state and constraint enforcement lives behind the traits in
//! [`core`]:
//!
//! - [`core::UserStore`] - single-record operations: create, list, find by
//!   credentials, update, soft delete, status toggle, profile image, count
//! - [`core::BulkUserInsert`] - the batch-insert contract used by the bulk
//!   import workflow; strictly positional per-row outcomes
//!
//! Uniqueness of the email column is enforced by the database itself, which
//! makes it the final arbiter of conflicting concurrent inserts - callers
//! never pre-check for duplicates.
//!
//! ## Soft deletes
//!
//! Deleting a user sets a tombstone flag rather than removing the row.
//! Tombstoned users are excluded from listings and credential checks, and
//! reject further updates, but their email still occupies the uniqueness
//! namespace.
//!
//! ## Backends
//!
//! - `sqlite` (default feature) - [`backends::sqlite::SqliteStore`], a
//!   file-based or in-memory SQLite database behind an r2d2 connection pool.
//!
//! ## Example
//!
//! ```rust,ignore
//! use roster_persistence::backends::sqlite::SqliteStore;
//! use roster_persistence::core::UserStore;
//! use roster_model::{CandidateUser, Role};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::in_memory()?;
//! store.init_schema()?;
//!
//! let candidate = CandidateUser::new(
//!     "Ada", "Lovelace", "9876543210", "ada@gmail.com", "12 Analytical Row", "Engine@42",
//! );
//! let stored = store.create(candidate, Role::User).await?;
//! println!("created user {}", stored.id);
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

pub use error::{StorageError, StorageResult};
