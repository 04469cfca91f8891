//! Product models.

use chrono::{DateTime, Utc};

use emporium_core::{CategoryId, Price, ProductId};

/// A product row.
#[derive(Debug, Clone)]
pub struct Product {
    /// Database ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Units in stock.
    pub stock: i32,
    /// Optional image URL.
    pub image_url: Option<String>,
    /// Owning category.
    pub category_id: CategoryId,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

/// A product joined with its category name, for list views.
#[derive(Debug, Clone)]
pub struct ProductListing {
    /// Database ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Units in stock.
    pub stock: i32,
    /// Optional image URL.
    pub image_url: Option<String>,
    /// Owning category.
    pub category_id: CategoryId,
    /// Name of the owning category.
    pub category_name: String,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}
