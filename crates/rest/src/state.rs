//! Application state for the Roster REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the storage backend and the server configuration.

use std::sync::Arc;

use roster_model::Role;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type
///
/// # Example
///
/// ```rust,ignore
/// use roster_rest::{AppState, ServerConfig};
/// use roster_persistence::backends::sqlite::SqliteStore;
/// use std::sync::Arc;
///
/// let store = SqliteStore::in_memory()?;
/// let config = ServerConfig::default();
/// let state = AppState::new(Arc::new(store), config);
/// ```
pub struct AppState<S> {
    /// The storage backend.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Resolves a client-supplied role string against the configured
    /// privileged role name. Anything else is a view-only user.
    pub fn role_of(&self, role: &str) -> Role {
        if role.trim().eq_ignore_ascii_case(&self.config.admin_role) {
            Role::Admin
        } else {
            Role::User
        }
    }

    /// Refuses non-privileged roles. The check runs before any store
    /// interaction in every mutating handler.
    pub fn require_admin(&self, role: &str) -> crate::error::RestResult<()> {
        if self.role_of(role).is_admin() {
            Ok(())
        } else {
            Err(crate::error::RestError::Forbidden {
                message: "Access denied: admin only".to_string(),
            })
        }
    }

    /// Returns the default page size for listings.
    pub fn default_page_size(&self) -> usize {
        self.config.default_page_size
    }

    /// Returns the maximum page size for listings.
    pub fn max_page_size(&self) -> usize {
        self.config.max_page_size
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullStore;

    fn state() -> AppState<NullStore> {
        AppState::new(Arc::new(NullStore), ServerConfig::default())
    }

    #[test]
    fn test_role_of_matches_configured_admin_role() {
        let state = state();
        assert_eq!(state.role_of("admin"), Role::Admin);
        assert_eq!(state.role_of(" ADMIN "), Role::Admin);
        assert_eq!(state.role_of("user"), Role::User);
        assert_eq!(state.role_of(""), Role::User);
    }

    #[test]
    fn test_custom_admin_role_name() {
        let config = ServerConfig {
            admin_role: "superuser".to_string(),
            ..Default::default()
        };
        let state = AppState::new(Arc::new(NullStore), config);
        assert_eq!(state.role_of("superuser"), Role::Admin);
        // "admin" is no longer privileged under the custom name.
        assert_eq!(state.role_of("admin"), Role::User);
    }

    #[test]
    fn test_require_admin() {
        let state = state();
        assert!(state.require_admin("admin").is_ok());
        assert!(state.require_admin("user").is_err());
    }

    #[test]
    fn test_app_state_clone_shares_config() {
        let state = state();
        let cloned = state.clone();
        assert_eq!(
            state.config().default_page_size,
            cloned.config().default_page_size
        );
    }
}
