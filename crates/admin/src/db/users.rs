//! User repository for database operations.
//!
//! Queries are runtime-checked; rows are decoded into plain row structs and
//! converted into domain types via `TryFrom` so invalid stored data surfaces
//! as `DataCorruption` instead of a panic.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use emporium_core::{Email, Role, UserId};

use super::{RepositoryError, is_unique_violation};
use crate::models::User;

/// Internal row type for user queries.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i32,
    name: String,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let role: Role = row.role.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid role in database: {e}"))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            name: row.name,
            email,
            role,
            created_at: row.created_at,
        })
    }
}

/// Internal row type for credential lookups (includes the password hash).
#[derive(Debug, sqlx::FromRow)]
struct UserAuthRow {
    id: i32,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserAuthRow> for (User, String) {
    type Error = RepositoryError;

    fn try_from(row: UserAuthRow) -> Result<Self, Self::Error> {
        let user = UserRow {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
            created_at: row.created_at,
        }
        .try_into()?;
        Ok((user, row.password_hash))
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all user accounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, role, created_at FROM users ORDER BY created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get an admin account and its password hash by email.
    ///
    /// Only rows with `role = 'Admin'` match; login for other roles fails at
    /// this single statement, the same way a wrong email does.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_admin_credentials(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, UserAuthRow>(
            "SELECT id, name, email, password_hash, role, created_at \
             FROM users WHERE email = $1 AND role = 'Admin'",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Create a user account.
    ///
    /// Uses a single conditional insert: if the email is already taken, no
    /// row is written and `Conflict` is returned. There is no separate
    /// existence check, so concurrent registrations cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already registered.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        name: &str,
        email: &Email,
        password_hash: &str,
        role: Role,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (email) DO NOTHING \
             RETURNING id, name, email, role, created_at",
        )
        .bind(name)
        .bind(email.as_str())
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(row) => row.try_into(),
            None => Err(RepositoryError::Conflict(format!(
                "email already registered: {email}"
            ))),
        }
    }

    /// Overwrite a user's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has this ID.
    /// Returns `RepositoryError::Conflict` if the new email is taken.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: UserId,
        name: &str,
        email: &Email,
        role: Role,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE users SET name = $2, email = $3, role = $4 WHERE id = $1")
            .bind(id)
            .bind(name)
            .bind(email.as_str())
            .bind(role.as_str())
            .execute(self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    RepositoryError::Conflict(format!("email already registered: {email}"))
                } else {
                    RepositoryError::Database(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has this ID.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row_conversion() {
        let row = UserRow {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: "Admin".to_string(),
            created_at: Utc::now(),
        };

        let user: User = row.try_into().unwrap();
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.email.as_str(), "ada@example.com");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_user_row_rejects_bad_role() {
        let row = UserRow {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: "Overlord".to_string(),
            created_at: Utc::now(),
        };

        let result: Result<User, _> = row.try_into();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }

    #[test]
    fn test_user_row_rejects_bad_email() {
        let row = UserRow {
            id: 1,
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            role: "Staff".to_string(),
            created_at: Utc::now(),
        };

        let result: Result<User, _> = row.try_into();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }
}
