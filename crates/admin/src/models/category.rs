//! Product category model.

use chrono::{DateTime, Utc};

use emporium_core::CategoryId;

/// A product category.
#[derive(Debug, Clone)]
pub struct Category {
    /// Database ID.
    pub id: CategoryId,
    /// Category name (products reference categories by this name in forms).
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}
