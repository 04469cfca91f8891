//! HTTP middleware for the admin panel.
//!
//! - [`session`] - tower-sessions layer (in-process store, signed cookie)
//! - [`auth`] - extractors gating authenticated routes

pub mod auth;
pub mod session;

pub use auth::{OptionalAdminAuth, RequireAdminAuth, clear_current_admin, set_current_admin};
pub use session::create_session_layer;
