//! Product repository for database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use emporium_core::{CategoryId, Price, ProductId};

use super::RepositoryError;
use crate::models::{Product, ProductListing};

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    description: String,
    price: Decimal,
    stock: i32,
    image_url: Option<String>,
    category_id: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = Price::new(row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price,
            stock: row.stock,
            image_url: row.image_url,
            category_id: CategoryId::new(row.category_id),
            created_at: row.created_at,
        })
    }
}

/// Internal row type for the product list view (joined with category name).
#[derive(Debug, sqlx::FromRow)]
struct ProductListingRow {
    id: i32,
    name: String,
    description: String,
    price: Decimal,
    stock: i32,
    image_url: Option<String>,
    category_id: i32,
    category_name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductListingRow> for ProductListing {
    type Error = RepositoryError;

    fn try_from(row: ProductListingRow) -> Result<Self, Self::Error> {
        let price = Price::new(row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price,
            stock: row.stock,
            image_url: row.image_url,
            category_id: CategoryId::new(row.category_id),
            category_name: row.category_name,
            created_at: row.created_at,
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products joined with their category name, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_all(&self) -> Result<Vec<ProductListing>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductListingRow>(
            "SELECT p.id, p.name, p.description, p.price, p.stock, p.image_url, \
                    p.category_id, c.name AS category_name, p.created_at \
             FROM products p \
             JOIN categories c ON c.id = p.category_id \
             ORDER BY p.created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, stock, image_url, category_id, created_at \
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        price: Price,
        stock: i32,
        image_url: Option<&str>,
        category_id: CategoryId,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (name, description, price, stock, image_url, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, name, description, price, stock, image_url, category_id, created_at",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock)
        .bind(image_url)
        .bind(category_id)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Overwrite a product's editable fields (the category stays put).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has this ID.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: ProductId,
        name: &str,
        description: &str,
        price: Price,
        stock: i32,
        image_url: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET name = $2, description = $3, price = $4, stock = $5, \
             image_url = $6 WHERE id = $1",
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock)
        .bind(image_url)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has this ID.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
