//! Core user storage trait.
//!
//! This module defines the [`UserStore`] trait, the single-record half of the
//! persistence boundary. The batch-insert half lives in
//! [`super::bulk::BulkUserInsert`].

use async_trait::async_trait;
use uuid::Uuid;

use roster_model::{CandidateUser, Role, StoredUser, UserUpdate};

use crate::error::StorageResult;
use crate::types::{UserPage, UserQuery};

/// Single-record storage operations for user records.
///
/// # Soft deletes
///
/// `soft_delete` sets a tombstone flag; the row is retained and its email
/// keeps occupying the uniqueness namespace. Tombstoned users are invisible
/// to `list`, `find_by_credentials`, and `count`, and every mutating
/// operation treats them as not found.
///
/// # Validation
///
/// The store does not run business-rule validation - that belongs to the
/// import pipeline and the HTTP layer. The store enforces only what the
/// database schema enforces: uniqueness of email.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Inserts a single user record with the given role.
    ///
    /// # Errors
    ///
    /// * `StorageError::Constraint(DuplicateEmail)` - the email is taken
    /// * `StorageError::Backend` - the insert failed for any other reason
    async fn create(&self, candidate: CandidateUser, role: Role) -> StorageResult<StoredUser>;

    /// Lists non-deleted users matching `query`, with the total match count.
    async fn list(&self, query: &UserQuery) -> StorageResult<UserPage>;

    /// Looks up a non-deleted user by exact email and password.
    ///
    /// This is the whole of Roster's credential check; it is deliberately not
    /// a security system (see the crate docs of `roster-model`).
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> StorageResult<Option<StoredUser>>;

    /// Reads a user by identifier, tombstoned or not.
    async fn read(&self, id: Uuid) -> StorageResult<Option<StoredUser>>;

    /// Applies an edit to an existing user.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - unknown id, or the record is
    ///   already tombstoned
    async fn update(&self, id: Uuid, update: UserUpdate) -> StorageResult<StoredUser>;

    /// Sets the tombstone flag. Idempotent once the row exists.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - unknown id
    async fn soft_delete(&self, id: Uuid) -> StorageResult<()>;

    /// Flips the active/inactive flag and returns the new value.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - unknown id or tombstoned
    async fn toggle_status(&self, id: Uuid) -> StorageResult<bool>;

    /// Stores a profile image data URL for the user.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - unknown id or tombstoned
    async fn set_profile_image(&self, id: Uuid, data_url: &str) -> StorageResult<()>;

    /// Counts non-deleted users.
    async fn count(&self) -> StorageResult<u64>;
}
