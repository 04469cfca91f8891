//! Customer account CRUD route handlers.
//!
//! Customers are rows in the same `users` table the login flow reads;
//! creating one goes through the auth service so the password is hashed
//! the same way.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;

use emporium_core::{Email, Role, UserId};

use crate::db::UserRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::User;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Customer view for templates.
#[derive(Debug, Clone)]
pub struct CustomerView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

impl From<&User> for CustomerView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i32(),
            name: user.name.clone(),
            email: user.email.to_string(),
            role: user.role.to_string(),
            created_at: user.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Customer list page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/index.html")]
struct CustomersIndexTemplate {
    admin_name: String,
    customers: Vec<CustomerView>,
}

/// Customer create form fields.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerForm {
    name: String,
    email: String,
    password: String,
    role: String,
}

/// Customer update form fields (password is never edited here).
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerForm {
    name: String,
    email: String,
    role: String,
}

/// Build the customer router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customer", get(index).post(create))
        .route("/customer/edit/{id}", post(update))
        .route("/customer/delete/{id}", post(delete))
}

/// GET /customer
async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<CustomersIndexTemplate, AppError> {
    let users = UserRepository::new(state.pool()).list_all().await?;

    Ok(CustomersIndexTemplate {
        admin_name: admin.name,
        customers: users.iter().map(CustomerView::from).collect(),
    })
}

/// POST /customer
async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<CreateCustomerForm>,
) -> Result<Redirect, AppError> {
    if form.name.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty() {
        return Err(AppError::BadRequest(
            "Name, email and password are required".to_string(),
        ));
    }

    let email = parse_email(&form.email)?;
    let role = parse_role(&form.role)?;

    AuthService::new(state.pool())
        .create_account(form.name.trim(), &email, &form.password, role)
        .await?;

    Ok(Redirect::to("/customer"))
}

/// POST /customer/edit/{id}
async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<UpdateCustomerForm>,
) -> Result<Redirect, AppError> {
    if form.name.trim().is_empty() || form.email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Name and email are required".to_string(),
        ));
    }

    let email = parse_email(&form.email)?;
    let role = parse_role(&form.role)?;

    UserRepository::new(state.pool())
        .update(UserId::new(id), form.name.trim(), &email, role)
        .await?;

    Ok(Redirect::to("/customer"))
}

/// POST /customer/delete/{id}
async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    UserRepository::new(state.pool())
        .delete(UserId::new(id))
        .await?;

    Ok(Redirect::to("/customer"))
}

fn parse_email(raw: &str) -> Result<Email, AppError> {
    Email::parse(raw.trim()).map_err(|e| AppError::BadRequest(format!("Invalid email: {e}")))
}

fn parse_role(raw: &str) -> Result<Role, AppError> {
    raw.trim()
        .parse::<Role>()
        .map_err(|_| AppError::BadRequest(format!("Unknown role: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_email() {
        assert!(parse_email(" ada@example.com ").is_ok());
        assert!(parse_email("nope").is_err());
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("Admin").unwrap(), Role::Admin);
        assert_eq!(parse_role(" Staff ").unwrap(), Role::Staff);
        assert!(parse_role("root").is_err());
    }
}
