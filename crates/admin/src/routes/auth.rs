//! Authentication route handlers.
//!
//! Login is admin-only; registration creates the account and signs the new
//! user straight in. Failures render the error page with a real status code
//! rather than a 200.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tower_sessions::{Expiry, Session};

use emporium_core::Role;

use crate::error::AppError;
use crate::filters;
use crate::middleware::{OptionalAdminAuth, set_current_admin};
use crate::models::{CurrentAdmin, User};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
struct LoginPageTemplate;

/// Registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
struct RegisterPageTemplate;

/// Login form fields. The email field is named `username` in the form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

/// Registration form fields.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    name: String,
    username: String,
    password: String,
    role: String,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/register", get(register_page).post(register))
        .route("/logout", get(logout))
}

/// GET /login
async fn login_page(OptionalAdminAuth(admin): OptionalAdminAuth) -> Response {
    if admin.is_some() {
        Redirect::to("/order").into_response()
    } else {
        LoginPageTemplate.into_response()
    }
}

/// POST /login
async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    if form.username.trim().is_empty() || form.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let auth = AuthService::new(state.pool());
    let user = auth.login(form.username.trim(), &form.password).await?;

    establish_session(&session, &user).await?;
    tracing::info!(user_id = %user.id, "admin logged in");

    Ok(Redirect::to("/order"))
}

/// GET /register
async fn register_page(OptionalAdminAuth(admin): OptionalAdminAuth) -> Response {
    if admin.is_some() {
        Redirect::to("/order").into_response()
    } else {
        RegisterPageTemplate.into_response()
    }
}

/// POST /register
async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, AppError> {
    if form.name.trim().is_empty() || form.username.trim().is_empty() || form.password.is_empty() {
        return Err(AppError::BadRequest(
            "Name, email and password are required".to_string(),
        ));
    }

    let role: Role = form
        .role
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Unknown role: {}", form.role)))?;

    let auth = AuthService::new(state.pool());
    let user = auth
        .register(form.name.trim(), form.username.trim(), &form.password, role)
        .await?;

    establish_session(&session, &user).await?;
    tracing::info!(user_id = %user.id, "account registered");

    Ok(Redirect::to("/order"))
}

/// GET /logout
///
/// Destroys the session server-side. A flush failure is logged and the
/// client is redirected regardless.
async fn logout(session: Session) -> Redirect {
    if let Err(e) = session.flush().await {
        tracing::warn!("failed to destroy session: {e}");
    }
    Redirect::to("/")
}

/// Store the session snapshot and pin its expiry to 24h from now.
async fn establish_session(session: &Session, user: &User) -> Result<(), AppError> {
    let admin = CurrentAdmin {
        id: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role,
    };

    set_current_admin(session, &admin)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    // Expiry counts from session creation, not last activity
    let expires_at = tower_sessions::cookie::time::OffsetDateTime::now_utc()
        + tower_sessions::cookie::time::Duration::seconds(
            crate::middleware::session::SESSION_EXPIRY_SECONDS,
        );
    session.set_expiry(Some(Expiry::AtDateTime(expires_at)));

    Ok(())
}
