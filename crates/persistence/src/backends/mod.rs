//! Storage backend implementations.

#[cfg(feature = "sqlite")]
pub mod sqlite;
