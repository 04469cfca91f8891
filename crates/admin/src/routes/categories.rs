//! Category CRUD route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;

use emporium_core::CategoryId;

use crate::db::CategoryRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::Category;
use crate::state::AppState;

/// Category view for templates.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.as_i32(),
            name: category.name.clone(),
            description: category.description.clone(),
            created_at: category.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Category list page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
struct CategoriesIndexTemplate {
    admin_name: String,
    categories: Vec<CategoryView>,
}

/// Category create/update form fields.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    name: String,
    description: String,
}

/// Build the category router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/category", get(index).post(create))
        .route("/category/edit/{id}", post(update))
        .route("/category/delete/{id}", post(delete))
}

/// GET /category
async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<CategoriesIndexTemplate, AppError> {
    let categories = CategoryRepository::new(state.pool()).list_all().await?;

    Ok(CategoriesIndexTemplate {
        admin_name: admin.name,
        categories: categories.iter().map(CategoryView::from).collect(),
    })
}

/// POST /category
async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect, AppError> {
    if form.name.trim().is_empty() {
        return Err(AppError::BadRequest("Category name is required".to_string()));
    }

    CategoryRepository::new(state.pool())
        .create(form.name.trim(), form.description.trim())
        .await?;

    Ok(Redirect::to("/category"))
}

/// POST /category/edit/{id}
async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect, AppError> {
    if form.name.trim().is_empty() {
        return Err(AppError::BadRequest("Category name is required".to_string()));
    }

    CategoryRepository::new(state.pool())
        .update(CategoryId::new(id), form.name.trim(), form.description.trim())
        .await?;

    Ok(Redirect::to("/category"))
}

/// POST /category/delete/{id}
async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    CategoryRepository::new(state.pool())
        .delete(CategoryId::new(id))
        .await?;

    Ok(Redirect::to("/category"))
}
