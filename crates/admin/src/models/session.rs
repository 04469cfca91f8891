//! State carried in the session cookie.

use serde::{Deserialize, Serialize};

use emporium_core::{Email, Role, UserId};

/// Identity of the signed-in admin, captured at login or registration.
///
/// Later requests read this snapshot instead of hitting the database, so a
/// renamed or demoted account keeps its old identity until the next login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub role: Role,
}

/// Keys under which values are stored in the session.
pub mod keys {
    /// The [`CurrentAdmin`](super::CurrentAdmin) snapshot.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
