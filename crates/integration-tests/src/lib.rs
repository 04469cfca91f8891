//! Integration tests for the Emporium admin server.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! docker compose up -d postgres
//! cargo run -p emporium-cli -- migrate
//!
//! # Start the admin server
//! cargo run -p emporium-admin
//!
//! # Run the ignored integration tests
//! cargo test -p emporium-integration-tests -- --ignored
//! ```
//!
//! The base URL defaults to `http://localhost:3001` and can be overridden
//! with `ADMIN_BASE_URL`.
//!
//! # Test Categories
//!
//! - `admin_auth` - Login, registration, logout, and session gating
//! - `admin_catalog` - Category and product management
//! - `admin_customers` - Customer account management

#![cfg_attr(not(test), forbid(unsafe_code))]

use emporium_core::Role;
use reqwest::Client;
use reqwest::redirect::Policy;
use uuid::Uuid;

/// Base URL for the admin server (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Build an HTTP client with a cookie store and redirects disabled.
///
/// Redirects stay disabled so tests can assert on the `Location` header
/// instead of following it.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Generate a unique email address for a test account.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4())
}

/// Register a fresh admin account and leave its session in the cookie store.
///
/// # Panics
///
/// Panics if the registration request fails or does not redirect.
pub async fn register_admin(client: &Client, email: &str, password: &str) {
    let base_url = admin_base_url();
    let resp = client
        .post(format!("{base_url}/register"))
        .form(&[
            ("name", "Integration Admin"),
            ("username", email),
            ("password", password),
            ("role", Role::Admin.as_str()),
        ])
        .send()
        .await
        .expect("Failed to register admin");

    assert!(
        resp.status().is_redirection(),
        "Expected redirect after registration, got: {}",
        resp.status()
    );
}

/// Extract the numeric IDs following `prefix` in an HTML body.
///
/// Row forms post to paths like `/category/edit/42`, so scanning for the
/// path prefix recovers the IDs rendered on the page.
#[must_use]
pub fn extract_ids(body: &str, prefix: &str) -> Vec<i32> {
    let mut ids = Vec::new();
    let mut rest = body;
    while let Some(pos) = rest.find(prefix) {
        rest = rest.get(pos + prefix.len()..).unwrap_or("");
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        if let Ok(id) = digits.parse() {
            ids.push(id);
        }
    }
    ids
}
