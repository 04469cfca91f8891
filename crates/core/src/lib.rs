//! Shared domain types for Emporium.
//!
//! Everything the server and CLI agree on lives here: typed IDs, validated
//! emails, non-negative prices, and account roles. The crate does no I/O of
//! its own; the optional `postgres` feature only adds sqlx column encodings
//! for the newtypes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
