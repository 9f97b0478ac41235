//! Server configuration for the Roster REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ROSTER_SERVER_PORT` | 8080 | Server port |
//! | `ROSTER_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `ROSTER_LOG_LEVEL` | info | Log level |
//! | `ROSTER_MAX_BODY_SIZE` | 10485760 | Max request body (bytes) |
//! | `ROSTER_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ROSTER_ENABLE_CORS` | true | Enable CORS |
//! | `ROSTER_CORS_ORIGINS` | * | Allowed origins |
//! | `ROSTER_CORS_METHODS` | GET,POST,PUT,PATCH,DELETE,OPTIONS | Allowed methods |
//! | `ROSTER_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `ROSTER_DATABASE_URL` | roster.db | SQLite database path |
//! | `ROSTER_BASE_URL` | http://localhost:8080 | Server base URL |
//! | `ROSTER_ADMIN_ROLE` | admin | Name of the privileged role |
//! | `ROSTER_DEFAULT_PAGE_SIZE` | 20 | Default listing page size |
//! | `ROSTER_MAX_PAGE_SIZE` | 1000 | Maximum listing page size |
//! | `ROSTER_EXPORT_FONT_DIR` | (unset) | Directory with TTF fonts for PDF export |
//! | `ROSTER_EXPORT_FONT_FAMILY` | LiberationSans | Font family name for PDF export |
//!
//! # Example
//!
//! ```rust
//! use roster_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Server configuration for the Roster REST API.
///
/// This struct can be constructed from environment variables using
/// [`ServerConfig::from_env`], from command line arguments using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user-administration REST server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "ROSTER_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "ROSTER_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ROSTER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes. Bounds both JSON payloads and
    /// bulk-upload files.
    #[arg(long, env = "ROSTER_MAX_BODY_SIZE", default_value = "10485760")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "ROSTER_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "ROSTER_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "ROSTER_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "ROSTER_CORS_METHODS",
        default_value = "GET,POST,PUT,PATCH,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "ROSTER_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// SQLite database path, or ":memory:".
    #[arg(long, env = "ROSTER_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Base URL for the server (used in download links).
    #[arg(long, env = "ROSTER_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Name of the privileged role. Requests whose `user_role` field matches
    /// this (case-insensitively) may mutate user records.
    #[arg(long, env = "ROSTER_ADMIN_ROLE", default_value = "admin")]
    pub admin_role: String,

    /// Default page size for listings.
    #[arg(long, env = "ROSTER_DEFAULT_PAGE_SIZE", default_value = "20")]
    pub default_page_size: usize,

    /// Maximum page size for listings.
    #[arg(long, env = "ROSTER_MAX_PAGE_SIZE", default_value = "1000")]
    pub max_page_size: usize,

    /// Directory containing the TTF font files used for PDF export. PDF
    /// export answers 501 until this is configured.
    #[arg(long, env = "ROSTER_EXPORT_FONT_DIR")]
    pub export_font_dir: Option<String>,

    /// Font family name (file name stem) inside the export font directory.
    #[arg(long, env = "ROSTER_EXPORT_FONT_FAMILY", default_value = "LiberationSans")]
    pub export_font_family: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 10 * 1024 * 1024, // 10MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,PATCH,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            database_url: None,
            base_url: "http://localhost:8080".to_string(),
            admin_role: "admin".to_string(),
            default_page_size: 20,
            max_page_size: 1000,
            export_font_dir: None,
            export_font_family: "LiberationSans".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if self.admin_role.trim().is_empty() {
            errors.push("Admin role cannot be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            base_url: "http://localhost:0".to_string(),
            default_page_size: 10,
            max_page_size: 100,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.admin_role, "admin");
        assert!(config.enable_cors);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_invalid_page_sizes() {
        let config = ServerConfig {
            default_page_size: 100,
            max_page_size: 50,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_admin_role() {
        let config = ServerConfig {
            admin_role: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.default_page_size, 10);
    }
}
