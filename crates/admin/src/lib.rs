//! Emporium Admin library.
//!
//! Server-rendered back-office panel: an admin authenticates with email and
//! password, then manages categories, products, and customer accounts stored
//! in `PostgreSQL`. Each request maps to at most one SQL statement and a
//! rendered page.
//!
//! The crate is split the usual way:
//!
//! - [`config`] - environment-driven configuration
//! - [`db`] - connection pool and per-table repositories
//! - [`models`] - domain types and session state
//! - [`middleware`] - session layer and auth extractors
//! - [`services`] - authentication (argon2 password hashing)
//! - [`routes`] - HTTP handlers and askama templates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
