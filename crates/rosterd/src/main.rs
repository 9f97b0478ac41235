//! Roster server binary.
//!
//! A small user-administration REST server over SQLite.

use clap::Parser;
use roster_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

#[cfg(feature = "sqlite")]
use roster_persistence::backends::sqlite::SqliteStore;

/// Creates and initializes the SQLite store from the server configuration.
#[cfg(feature = "sqlite")]
fn create_sqlite_store(config: &ServerConfig) -> anyhow::Result<SqliteStore> {
    let db_path = config.database_url.as_deref().unwrap_or("roster.db");
    info!(database = %db_path, "Initializing SQLite store");

    let store = SqliteStore::open(db_path)?;
    store.init_schema()?;
    Ok(store)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        admin_role = %config.admin_role,
        "Starting Roster server"
    );

    start_sqlite(config).await
}

/// Starts the server with the SQLite backend.
#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let store = create_sqlite_store(&config)?;
    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}

/// Fallback when the sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p roster-server --features sqlite"
    )
}
