//! Session-gating extractors.
//!
//! Handlers behind the login wall take [`RequireAdminAuth`]; requests
//! without a signed-in admin are bounced to the login page. Public pages
//! that only adapt their navigation use [`OptionalAdminAuth`].

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};

/// The signed-in admin, or a redirect to `/login`.
///
/// ```rust,ignore
/// async fn dashboard(RequireAdminAuth(admin): RequireAdminAuth) -> impl IntoResponse {
///     format!("Welcome back, {}", admin.name)
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

/// Rejection for [`RequireAdminAuth`].
pub enum AdminAuthRejection {
    /// No signed-in admin on this session.
    RedirectToLogin,
    /// The session layer is missing from the middleware stack.
    SessionUnavailable,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::SessionUnavailable => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = session_from_parts(parts).ok_or(AdminAuthRejection::SessionUnavailable)?;

        current_admin(session)
            .await
            .map(Self)
            .ok_or(AdminAuthRejection::RedirectToLogin)
    }
}

/// The signed-in admin if there is one, without rejecting the request.
pub struct OptionalAdminAuth(pub Option<CurrentAdmin>);

impl<S> FromRequestParts<S> for OptionalAdminAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match session_from_parts(parts) {
            Some(session) => Ok(Self(current_admin(session).await)),
            None => Ok(Self(None)),
        }
    }
}

// SessionManagerLayer stores the session in request extensions.
fn session_from_parts(parts: &Parts) -> Option<&Session> {
    parts.extensions.get::<Session>()
}

async fn current_admin(session: &Session) -> Option<CurrentAdmin> {
    session
        .get(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()
}

/// Record the signed-in admin on the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Drop the signed-in admin from the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await
        .map(|_| ())
}
