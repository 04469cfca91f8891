//! Admin user management commands.
//!
//! ```bash
//! em-cli admin create -e admin@example.com -n "Admin Name" -p "a strong password"
//! ```

use thiserror::Error;

use emporium_admin::db::RepositoryError;
use emporium_admin::db::users::UserRepository;
use emporium_admin::services::auth::hash_password;
use emporium_core::{Email, Role};

use super::CommandError;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Connection or configuration error.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] emporium_core::EmailError),

    /// Password could not be hashed.
    #[error("Password hashing failed")]
    PasswordHash,

    /// User already exists.
    #[error("User already exists with email: {0}")]
    UserExists(String),

    /// Repository error.
    #[error("Database error: {0}")]
    Repository(RepositoryError),
}

/// Create a new admin user.
///
/// # Errors
///
/// Returns `AdminError` if the email is invalid, the user already exists,
/// or the database operation fails.
///
/// # Returns
///
/// The ID of the created admin user.
pub async fn create_user(email: &str, name: &str, password: &str) -> Result<i32, AdminError> {
    let email = Email::parse(email)?;
    let password_hash = hash_password(password).map_err(|_| AdminError::PasswordHash)?;

    let pool = super::connect().await?;

    tracing::info!("Creating admin user: {}", email);

    let user = UserRepository::new(&pool)
        .create(name, &email, &password_hash, Role::Admin)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => AdminError::UserExists(email.to_string()),
            other => AdminError::Repository(other),
        })?;

    tracing::info!(
        "Admin user created successfully! ID: {}, Email: {}",
        user.id,
        user.email
    );

    Ok(user.id.as_i32())
}
