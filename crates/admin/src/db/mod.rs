//! `PostgreSQL` access, one repository per table.
//!
//! - [`users`] - back-office accounts (unique email, argon2 hashes)
//! - [`categories`] - product categories
//! - [`products`] - products, each referencing a category
//!
//! The schema lives in `crates/admin/migrations/` and is applied out of
//! band with `cargo run -p emporium-cli -- migrate`; the server assumes it
//! is already in place.

pub mod categories;
pub mod products;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use categories::CategoryRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// What went wrong inside a repository call.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The query itself failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored value no longer passes domain validation.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// No row matched.
    #[error("not found")]
    NotFound,

    /// A uniqueness constraint fired.
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Open a connection pool against the configured database.
///
/// Ten connections is plenty for a single-admin back office; the acquire
/// timeout keeps a dead database from hanging requests indefinitely.
///
/// # Errors
///
/// Returns `sqlx::Error` when the initial connection fails.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Whether an sqlx error is a unique-constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Whether an sqlx error is a foreign-key violation.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}
