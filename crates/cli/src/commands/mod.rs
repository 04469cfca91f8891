//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

use emporium_admin::config::{ConfigError, DatabaseConfig};
use sqlx::PgPool;

/// Errors shared by commands that connect to the database.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Configuration error (missing or invalid `DB_*` variables).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Connect to the database configured by `DB_*` environment variables.
async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let database = DatabaseConfig::from_env()?;
    tracing::info!(
        "Connecting to database {} at {}:{}...",
        database.name,
        database.host,
        database.port
    );

    let pool = emporium_admin::db::create_pool(&database.connection_url()).await?;
    Ok(pool)
}
