//! User account model.

use chrono::{DateTime, Utc};

use emporium_core::{Email, Role, UserId};

/// A back-office user account.
///
/// The password hash never leaves the repository layer; this type carries
/// only the fields handlers and templates need.
#[derive(Debug, Clone)]
pub struct User {
    /// Database ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address (unique).
    pub email: Email,
    /// Role (`Admin` may sign in to the panel).
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
