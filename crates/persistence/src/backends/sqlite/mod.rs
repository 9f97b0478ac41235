//! SQLite backend implementation.
//!
//! A complete SQLite implementation of [`crate::core::UserStore`] and
//! [`crate::core::BulkUserInsert`]. Supports both in-memory databases (great
//! for testing) and file-based databases (for development and small
//! deployments).
//!
//! # Schema
//!
//! One `users` table with a unique index on `email`:
//!
//! ```sql
//! CREATE TABLE users (
//!     id TEXT PRIMARY KEY,
//!     first_name TEXT NOT NULL,
//!     last_name TEXT NOT NULL,
//!     contact TEXT NOT NULL,
//!     email TEXT NOT NULL,
//!     address TEXT NOT NULL,
//!     password TEXT NOT NULL,
//!     role TEXT NOT NULL DEFAULT 'user',
//!     profile_image TEXT,
//!     is_active INTEGER NOT NULL DEFAULT 1,
//!     is_deleted INTEGER NOT NULL DEFAULT 0,
//!     created_at TEXT NOT NULL
//! );
//! CREATE UNIQUE INDEX idx_users_email ON users (email);
//! ```
//!
//! The unique index is what turns a duplicate insert into a per-row
//! rejection during batch imports; there is no application-level duplicate
//! pre-check.
//!
//! # Example
//!
//! ```no_run
//! use roster_persistence::backends::sqlite::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::in_memory()?;
//! store.init_schema()?;
//! # Ok(())
//! # }
//! ```

mod schema;
mod store;

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

use crate::error::{BackendError, StorageResult};

/// Configuration for the SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStoreConfig {
    /// Maximum pooled connections.
    pub max_connections: u32,
    /// Connection acquisition timeout in milliseconds.
    pub connection_timeout_ms: u64,
    /// Busy-handler timeout in milliseconds.
    pub busy_timeout_ms: u64,
}

impl Default for SqliteStoreConfig {
    fn default() -> Self {
        Self {
            max_connections: 8,
            connection_timeout_ms: 5_000,
            busy_timeout_ms: 5_000,
        }
    }
}

/// SQLite-backed user store.
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
    /// Creates a new in-memory SQLite store.
    pub fn in_memory() -> StorageResult<Self> {
        Self::with_config(":memory:", SqliteStoreConfig::default())
    }

    /// Opens or creates a file-based SQLite database.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        Self::with_config(path, SqliteStoreConfig::default())
    }

    /// Creates a store with custom pool configuration.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        config: SqliteStoreConfig,
    ) -> StorageResult<Self> {
        let path_str = path.as_ref().to_string_lossy();
        let is_memory = path_str == ":memory:";

        let manager = SqliteConnectionManager::file(path.as_ref());

        // Every connection to ":memory:" opens its own empty database, so an
        // in-memory store must hold exactly one pooled connection.
        let max_size = if is_memory { 1 } else { config.max_connections };

        let pool = Pool::builder()
            .max_size(max_size)
            .connection_timeout(std::time::Duration::from_millis(
                config.connection_timeout_ms,
            ))
            .build(manager)
            .map_err(|e| BackendError::ConnectionFailed {
                backend_name: "sqlite".to_string(),
                message: e.to_string(),
            })?;

        let store = Self { pool };
        store.configure_connection(config.busy_timeout_ms)?;
        Ok(store)
    }

    /// Initializes the database schema, migrating if needed.
    pub fn init_schema(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        schema::initialize_schema(&conn)
    }

    /// Gets a connection from the pool.
    pub(crate) fn get_connection(
        &self,
    ) -> StorageResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| {
            BackendError::ConnectionFailed {
                backend_name: "sqlite".to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn configure_connection(&self, busy_timeout_ms: u64) -> StorageResult<()> {
        let conn = self.get_connection()?;
        conn.busy_timeout(std::time::Duration::from_millis(busy_timeout_ms))
            .map_err(|e| BackendError::Internal {
                backend_name: "sqlite".to_string(),
                message: format!("Failed to set busy timeout: {}", e),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_store() {
        let store = SqliteStore::in_memory().unwrap();
        store.init_schema().unwrap();
    }

    #[test]
    fn test_init_schema_is_idempotent() {
        let store = SqliteStore::in_memory().unwrap();
        store.init_schema().unwrap();
        store.init_schema().unwrap();
    }

    #[test]
    fn test_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.db");
        let store = SqliteStore::open(&path).unwrap();
        store.init_schema().unwrap();
        assert!(path.exists());
    }
}
