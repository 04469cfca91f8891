//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check (wired in main)
//! GET  /health/ready           - DB readiness check (wired in main)
//!
//! # Public pages
//! GET  /                       - Landing page
//! GET  /about                  - About page
//!
//! # Auth
//! GET  /login                  - Login form (redirects to /order if signed in)
//! POST /login                  - Authenticate (admin role only)
//! GET  /register               - Registration form
//! POST /register               - Create account and sign in
//! GET  /logout                 - Destroy session, redirect to /
//!
//! # Back office (require an admin session; redirect to /login otherwise)
//! GET  /order                  - Post-login landing page
//! GET  /category               - Category list + create form
//! POST /category               - Create category
//! POST /category/edit/{id}     - Update category
//! POST /category/delete/{id}   - Delete category
//! GET  /product                - Product list + create form
//! POST /product                - Create product (resolves category by name)
//! POST /product/edit/{id}      - Update product
//! POST /product/delete/{id}    - Delete product
//! GET  /customer               - Customer list + create form
//! POST /customer               - Create customer account
//! POST /customer/edit/{id}     - Update customer
//! POST /customer/delete/{id}   - Delete customer
//! ```

pub mod auth;
pub mod categories;
pub mod customers;
pub mod home;
pub mod orders;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .merge(auth::router())
        .merge(orders::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(customers::router())
}
