//! Seed command: sample categories and products for local development.
//!
//! ```bash
//! em-cli seed
//! ```

use thiserror::Error;

use emporium_admin::db::{CategoryRepository, ProductRepository, RepositoryError};
use emporium_core::Price;

use super::CommandError;

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Connection or configuration error.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Repository error.
    #[error("Database error: {0}")]
    Repository(#[from] RepositoryError),

    /// A seed price literal failed to parse.
    #[error("Invalid seed price: {0}")]
    Price(#[from] emporium_core::PriceError),
}

/// Sample catalog: (category, description, [(product, price, stock)]).
const SAMPLE_CATALOG: &[(&str, &str, &[(&str, &str, i32)])] = &[
    (
        "Kitchen",
        "Cookware and utensils",
        &[
            ("Stovetop Kettle", "24.99", 12),
            ("Chef's Knife", "59.00", 8),
        ],
    ),
    (
        "Stationery",
        "Paper goods and pens",
        &[
            ("A5 Notebook", "7.50", 40),
            ("Fountain Pen", "32.00", 15),
        ],
    ),
    (
        "Outdoors",
        "Camping and hiking gear",
        &[("Enamel Mug", "11.25", 30)],
    ),
];

/// Seed the database with sample categories and products.
///
/// Skips seeding entirely if any category already exists, so it is safe to
/// run more than once.
///
/// # Errors
///
/// Returns `SeedError` if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), SeedError> {
    let pool = super::connect().await?;

    let categories = CategoryRepository::new(&pool);
    if !categories.list_all().await?.is_empty() {
        tracing::info!("Categories already present, skipping seed");
        return Ok(());
    }

    let products = ProductRepository::new(&pool);
    let mut product_count = 0usize;

    for (name, description, items) in SAMPLE_CATALOG {
        let category = categories.create(name, description).await?;
        tracing::info!("Created category: {}", category.name);

        for (product_name, price, stock) in *items {
            let price = Price::parse(price)?;
            products
                .create(product_name, "", price, *stock, None, category.id)
                .await?;
            product_count += 1;
        }
    }

    tracing::info!(
        "Seed complete: {} categories, {} products",
        SAMPLE_CATALOG.len(),
        product_count
    );
    Ok(())
}
