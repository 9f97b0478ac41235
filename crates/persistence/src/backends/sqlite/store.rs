//! UserStore and BulkUserInsert implementations for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use tracing::debug;
use uuid::Uuid;

use roster_model::{CandidateUser, Role, StoredUser, UserUpdate};

use crate::core::{BatchRowOutcome, BulkUserInsert, UserStore};
use crate::error::{
    BackendError, ConstraintError, ResourceError, StorageError, StorageResult,
};
use crate::types::{SortField, SortOrder, StatusFilter, UserPage, UserQuery};

use super::SqliteStore;

/// Reason string attached to duplicate-email rejections in batch outcomes.
const DUPLICATE_EMAIL_REASON: &str = "Email already exists";

const USER_COLUMNS: &str = "id, first_name, last_name, contact, email, address, role, \
     profile_image, is_active, is_deleted, created_at";

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
    })
}

fn decode_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::SerializationError { message })
}

/// True when the error is SQLite's unique-constraint violation, which the
/// unique email index raises on duplicate inserts.
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Maps a row of `USER_COLUMNS` to a [`StoredUser`].
fn map_user_row(row: &Row<'_>) -> rusqlite::Result<StoredUser> {
    let id: String = row.get(0)?;
    let role: String = row.get(6)?;
    let created_at: String = row.get(10)?;

    let id = Uuid::parse_str(&id).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                10,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;

    Ok(StoredUser {
        id,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        contact: row.get(3)?,
        email: row.get(4)?,
        address: row.get(5)?,
        role: role.parse().expect("Role::from_str is infallible"),
        profile_image: row.get(7)?,
        is_active: row.get(8)?,
        is_deleted: row.get(9)?,
        created_at,
    })
}

/// Inserts one candidate, translating the unique-index failure into
/// [`ConstraintError::DuplicateEmail`].
fn insert_user(
    conn: &Connection,
    candidate: &CandidateUser,
    role: Role,
) -> StorageResult<StoredUser> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    conn.execute(
        "INSERT INTO users (id, first_name, last_name, contact, email, address, password, role,
                            is_active, is_deleted, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1, 0, ?9)",
        params![
            id.to_string(),
            candidate.first_name,
            candidate.last_name,
            candidate.contact,
            candidate.email,
            candidate.address,
            candidate.password,
            role.as_str(),
            now.to_rfc3339(),
        ],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            StorageError::Constraint(ConstraintError::DuplicateEmail {
                email: candidate.email.clone(),
            })
        } else {
            internal_error(format!("Failed to insert user: {}", e))
        }
    })?;

    Ok(StoredUser {
        id,
        first_name: candidate.first_name.clone(),
        last_name: candidate.last_name.clone(),
        contact: candidate.contact.clone(),
        email: candidate.email.clone(),
        address: candidate.address.clone(),
        role,
        profile_image: None,
        is_active: true,
        is_deleted: false,
        created_at: now,
    })
}

fn order_clause(sort_by: Option<SortField>, order: SortOrder) -> String {
    let direction = match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };
    match sort_by {
        Some(SortField::Name) => format!(
            "first_name COLLATE NOCASE {direction}, last_name COLLATE NOCASE {direction}"
        ),
        Some(SortField::Email) => format!("email COLLATE NOCASE {direction}"),
        Some(SortField::Contact) => format!("contact {direction}"),
        Some(SortField::Address) => format!("address COLLATE NOCASE {direction}"),
        Some(SortField::IsActive) => format!("is_active {direction}"),
        Some(SortField::CreatedAt) => format!("created_at {direction}"),
        // Creation order when no sort is requested.
        None => "rowid ASC".to_string(),
    }
}

/// WHERE clause (without the leading keyword) and its positional parameters.
fn filter_clause(query: &UserQuery) -> (String, Vec<String>) {
    let mut clause = String::from("is_deleted = 0");
    let mut bindings = Vec::new();

    if let Some(search) = query.search.as_deref().map(str::trim) {
        if !search.is_empty() {
            // One concatenated haystack, matching how the dashboard searches
            // across every visible column at once.
            clause.push_str(
                " AND lower(first_name || ' ' || last_name || ' ' || email || ' ' || contact \
                 || ' ' || address) LIKE ?1",
            );
            bindings.push(format!("%{}%", search.to_lowercase()));
        }
    }

    match query.status {
        StatusFilter::All => {}
        StatusFilter::Active => clause.push_str(" AND is_active = 1"),
        StatusFilter::Inactive => clause.push_str(" AND is_active = 0"),
    }

    (clause, bindings)
}

#[async_trait]
impl UserStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create(&self, candidate: CandidateUser, role: Role) -> StorageResult<StoredUser> {
        let conn = self.get_connection()?;
        let stored = insert_user(&conn, &candidate, role)?;
        debug!(id = %stored.id, email = %stored.email, "User created");
        Ok(stored)
    }

    async fn list(&self, query: &UserQuery) -> StorageResult<UserPage> {
        let conn = self.get_connection()?;
        let (filter, bindings) = filter_clause(query);

        let total: u64 = conn
            .query_row(
                &format!("SELECT COUNT(*) FROM users WHERE {filter}"),
                params_from_iter(bindings.iter()),
                |row| row.get(0),
            )
            .map_err(|e| internal_error(format!("Failed to count users: {}", e)))?;

        let mut sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {filter} ORDER BY {}",
            order_clause(query.sort_by, query.order)
        );
        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, query.offset));
        } else if query.offset > 0 {
            sql.push_str(&format!(" LIMIT -1 OFFSET {}", query.offset));
        }

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| internal_error(format!("Failed to prepare listing: {}", e)))?;
        let users = stmt
            .query_map(params_from_iter(bindings.iter()), map_user_row)
            .map_err(|e| internal_error(format!("Failed to list users: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| decode_error(format!("Failed to decode user row: {}", e)))?;

        Ok(UserPage { users, total })
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> StorageResult<Option<StoredUser>> {
        let conn = self.get_connection()?;
        conn.query_row(
            &format!(
                "SELECT {USER_COLUMNS} FROM users \
                 WHERE email = ?1 AND password = ?2 AND is_deleted = 0"
            ),
            params![email, password],
            map_user_row,
        )
        .optional()
        .map_err(|e| internal_error(format!("Credential lookup failed: {}", e)))
    }

    async fn read(&self, id: Uuid) -> StorageResult<Option<StoredUser>> {
        let conn = self.get_connection()?;
        conn.query_row(
            &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
            params![id.to_string()],
            map_user_row,
        )
        .optional()
        .map_err(|e| internal_error(format!("Failed to read user: {}", e)))
    }

    async fn update(&self, id: Uuid, update: UserUpdate) -> StorageResult<StoredUser> {
        let conn = self.get_connection()?;

        // Tombstoned records reject updates the same way unknown ids do.
        let changed = conn
            .execute(
                "UPDATE users SET first_name = ?1, last_name = ?2, contact = ?3, address = ?4,
                        role = COALESCE(?5, role)
                 WHERE id = ?6 AND is_deleted = 0",
                params![
                    update.first_name,
                    update.last_name,
                    update.contact,
                    update.address,
                    update.role.map(|r| r.as_str()),
                    id.to_string(),
                ],
            )
            .map_err(|e| internal_error(format!("Failed to update user: {}", e)))?;

        if changed == 0 {
            return Err(ResourceError::NotFound { id: id.to_string() }.into());
        }

        debug!(id = %id, "User updated");
        self.read(id)
            .await?
            .ok_or_else(|| ResourceError::NotFound { id: id.to_string() }.into())
    }

    async fn soft_delete(&self, id: Uuid) -> StorageResult<()> {
        let conn = self.get_connection()?;
        let changed = conn
            .execute(
                "UPDATE users SET is_deleted = 1 WHERE id = ?1",
                params![id.to_string()],
            )
            .map_err(|e| internal_error(format!("Failed to delete user: {}", e)))?;

        if changed == 0 {
            return Err(ResourceError::NotFound { id: id.to_string() }.into());
        }
        debug!(id = %id, "User soft-deleted");
        Ok(())
    }

    async fn toggle_status(&self, id: Uuid) -> StorageResult<bool> {
        let conn = self.get_connection()?;
        let changed = conn
            .execute(
                "UPDATE users
                 SET is_active = CASE WHEN is_active = 0 THEN 1 ELSE 0 END
                 WHERE id = ?1 AND is_deleted = 0",
                params![id.to_string()],
            )
            .map_err(|e| internal_error(format!("Failed to toggle status: {}", e)))?;

        if changed == 0 {
            return Err(ResourceError::NotFound { id: id.to_string() }.into());
        }

        let is_active: bool = conn
            .query_row(
                "SELECT is_active FROM users WHERE id = ?1",
                params![id.to_string()],
                |row| row.get(0),
            )
            .map_err(|e| internal_error(format!("Failed to read toggled status: {}", e)))?;

        debug!(id = %id, is_active, "User status toggled");
        Ok(is_active)
    }

    async fn set_profile_image(&self, id: Uuid, data_url: &str) -> StorageResult<()> {
        let conn = self.get_connection()?;
        let changed = conn
            .execute(
                "UPDATE users SET profile_image = ?1 WHERE id = ?2 AND is_deleted = 0",
                params![data_url, id.to_string()],
            )
            .map_err(|e| internal_error(format!("Failed to set profile image: {}", e)))?;

        if changed == 0 {
            return Err(ResourceError::NotFound { id: id.to_string() }.into());
        }
        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        conn.query_row(
            "SELECT COUNT(*) FROM users WHERE is_deleted = 0",
            [],
            |row| row.get(0),
        )
        .map_err(|e| internal_error(format!("Failed to count users: {}", e)))
    }
}

#[async_trait]
impl BulkUserInsert for SqliteStore {
    async fn insert_batch(
        &self,
        candidates: Vec<CandidateUser>,
    ) -> StorageResult<Vec<BatchRowOutcome>> {
        let conn = self.get_connection()?;
        let mut outcomes = Vec::with_capacity(candidates.len());

        // Each record inserts independently: a duplicate becomes a row-level
        // rejection, anything else aborts the whole batch.
        for candidate in &candidates {
            match insert_user(&conn, candidate, Role::User) {
                Ok(stored) => outcomes.push(BatchRowOutcome::Accepted {
                    user_id: stored.id,
                }),
                Err(err) if err.is_duplicate_email() => {
                    outcomes.push(BatchRowOutcome::Rejected {
                        reason: DUPLICATE_EMAIL_REASON.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        debug!(
            submitted = candidates.len(),
            accepted = outcomes.iter().filter(|o| o.is_accepted()).count(),
            "Batch insert completed"
        );
        Ok(outcomes)
    }
}
