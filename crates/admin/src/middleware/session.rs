//! Session middleware configuration.
//!
//! Sessions live in an in-process `MemoryStore`: they do not survive a
//! restart and are not shared across instances. The cookie carries only a
//! signed session ID (key derived from `SESSION_SECRET`), with
//! SameSite=Strict and a 24 hour expiry.

use secrecy::ExposeSecret;
use tower_sessions::cookie::Key;
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::AdminConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "emporium_session";

/// Session expiry time in seconds (24 hours).
pub const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with an in-process store and signed cookie.
///
/// The layer default is inactivity-based; login pins each session's expiry
/// to 24 hours from creation (`Expiry::AtDateTime`).
///
/// # Panics
///
/// Panics if the session secret is shorter than the 32 bytes key derivation
/// needs; `AdminConfig::from_env` enforces that minimum first.
#[must_use]
pub fn create_session_layer(config: &AdminConfig) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let store = MemoryStore::default();
    let key = Key::derive_from(config.session_secret.expose_secret().as_bytes());

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        // Served over plain HTTP on a loopback/LAN bind address.
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key)
}
