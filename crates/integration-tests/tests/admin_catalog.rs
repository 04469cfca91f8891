//! Integration tests for category and product management.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied (em-cli migrate)
//! - The admin server running (cargo run -p emporium-admin)
//!
//! Run with: cargo test -p emporium-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use uuid::Uuid;

use emporium_integration_tests::{
    admin_base_url, client, extract_ids, register_admin, unique_email,
};

/// Sign in a fresh admin and return the authenticated client.
async fn signed_in_client() -> Client {
    let client = client();
    register_admin(&client, &unique_email("catalog"), "correct horse battery").await;
    client
}

/// Create a category and return its ID as rendered on the listing page.
async fn create_category(client: &Client, name: &str) -> i32 {
    let base_url = admin_base_url();
    let resp = client
        .post(format!("{base_url}/category"))
        .form(&[("name", name), ("description", "Created by integration test")])
        .send()
        .await
        .expect("Failed to create category");
    assert!(resp.status().is_redirection());

    let body = client
        .get(format!("{base_url}/category"))
        .send()
        .await
        .expect("Failed to list categories")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains(name), "New category missing from listing");

    *extract_ids(&body, "/category/edit/")
        .iter()
        .max()
        .expect("No category IDs found on listing page")
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_category_crud() {
    let client = signed_in_client().await;
    let base_url = admin_base_url();

    let name = format!("Test Category {}", Uuid::new_v4());
    let id = create_category(&client, &name).await;

    // Update
    let renamed = format!("{name} Renamed");
    let resp = client
        .post(format!("{base_url}/category/edit/{id}"))
        .form(&[("name", renamed.as_str()), ("description", "Updated")])
        .send()
        .await
        .expect("Failed to update category");
    assert!(resp.status().is_redirection());

    let body = client
        .get(format!("{base_url}/category"))
        .send()
        .await
        .expect("Failed to list categories")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains(&renamed));

    // Delete
    let resp = client
        .post(format!("{base_url}/category/delete/{id}"))
        .send()
        .await
        .expect("Failed to delete category");
    assert!(resp.status().is_redirection());

    let body = client
        .get(format!("{base_url}/category"))
        .send()
        .await
        .expect("Failed to list categories")
        .text()
        .await
        .expect("Failed to read response");
    assert!(!body.contains(&renamed), "Deleted category still listed");
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_category_empty_name_bad_request() {
    let client = signed_in_client().await;
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/category"))
        .form(&[("name", ""), ("description", "No name given")])
        .send()
        .await
        .expect("Failed to attempt category create");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_category_with_products_delete_conflict() {
    let client = signed_in_client().await;
    let base_url = admin_base_url();

    let category_name = format!("Occupied Category {}", Uuid::new_v4());
    let id = create_category(&client, &category_name).await;

    let resp = client
        .post(format!("{base_url}/product"))
        .form(&[
            ("name", "Blocking Product"),
            ("description", ""),
            ("price", "4.99"),
            ("stock", "1"),
            ("image_url", ""),
            ("category", category_name.as_str()),
        ])
        .send()
        .await
        .expect("Failed to create product");
    assert!(resp.status().is_redirection());

    let resp = client
        .post(format!("{base_url}/category/delete/{id}"))
        .send()
        .await
        .expect("Failed to attempt category delete");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // The category survives the rejected delete
    let body = client
        .get(format!("{base_url}/category"))
        .send()
        .await
        .expect("Failed to list categories")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains(&category_name));
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_category_update_unknown_id_not_found() {
    let client = signed_in_client().await;
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/category/edit/999999999"))
        .form(&[("name", "Ghost"), ("description", "")])
        .send()
        .await
        .expect("Failed to attempt category update");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Product Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_product_crud() {
    let client = signed_in_client().await;
    let base_url = admin_base_url();

    let category_name = format!("Product Home {}", Uuid::new_v4());
    create_category(&client, &category_name).await;

    let product_name = format!("Test Product {}", Uuid::new_v4());
    let resp = client
        .post(format!("{base_url}/product"))
        .form(&[
            ("name", product_name.as_str()),
            ("description", "Created by integration test"),
            ("price", "19.99"),
            ("stock", "5"),
            ("image_url", ""),
            ("category", category_name.as_str()),
        ])
        .send()
        .await
        .expect("Failed to create product");
    assert!(resp.status().is_redirection());

    let body = client
        .get(format!("{base_url}/product"))
        .send()
        .await
        .expect("Failed to list products")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains(&product_name));
    assert!(body.contains("$19.99"), "Price not rendered in dollars");
    assert!(body.contains(&category_name), "Category name not joined in");

    let id = *extract_ids(&body, "/product/edit/")
        .iter()
        .max()
        .expect("No product IDs found on listing page");

    // Update price and stock
    let resp = client
        .post(format!("{base_url}/product/edit/{id}"))
        .form(&[
            ("name", product_name.as_str()),
            ("description", "Updated"),
            ("price", "24.50"),
            ("stock", "3"),
            ("image_url", "https://example.com/kettle.jpg"),
        ])
        .send()
        .await
        .expect("Failed to update product");
    assert!(resp.status().is_redirection());

    let body = client
        .get(format!("{base_url}/product"))
        .send()
        .await
        .expect("Failed to list products")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("$24.50"));
    assert!(body.contains("https://example.com/kettle.jpg"));

    // Delete
    let resp = client
        .post(format!("{base_url}/product/delete/{id}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert!(resp.status().is_redirection());

    let body = client
        .get(format!("{base_url}/product"))
        .send()
        .await
        .expect("Failed to list products")
        .text()
        .await
        .expect("Failed to read response");
    assert!(!body.contains(&product_name), "Deleted product still listed");
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_product_unknown_category_not_found() {
    let client = signed_in_client().await;
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/product"))
        .form(&[
            ("name", "Orphan Product"),
            ("description", ""),
            ("price", "9.99"),
            ("stock", "1"),
            ("image_url", ""),
            ("category", &format!("no-such-category-{}", Uuid::new_v4())),
        ])
        .send()
        .await
        .expect("Failed to attempt product create");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Category Not Found. Please create category first"));
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_product_invalid_price_bad_request() {
    let client = signed_in_client().await;
    let base_url = admin_base_url();

    let category_name = format!("Price Checks {}", Uuid::new_v4());
    create_category(&client, &category_name).await;

    for price in ["-5.00", "not a number"] {
        let resp = client
            .post(format!("{base_url}/product"))
            .form(&[
                ("name", "Bad Price Product"),
                ("description", ""),
                ("price", price),
                ("stock", "1"),
                ("image_url", ""),
                ("category", category_name.as_str()),
            ])
            .send()
            .await
            .expect("Failed to attempt product create");

        assert_eq!(
            resp.status(),
            StatusCode::BAD_REQUEST,
            "Expected 400 for price {price}"
        );
    }
}
