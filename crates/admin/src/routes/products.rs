//! Product CRUD route handlers.
//!
//! Product creation resolves the human-entered category *name* to its id;
//! an unknown name fails before anything is inserted.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;

use emporium_core::{Price, ProductId};

use crate::db::{CategoryRepository, ProductRepository};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::ProductListing;
use crate::routes::categories::CategoryView;
use crate::state::AppState;

/// Product view for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub price_raw: String,
    pub stock: i32,
    pub image_url: Option<String>,
    pub category_name: String,
}

impl From<&ProductListing> for ProductView {
    fn from(product: &ProductListing) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            price_raw: product.price.to_string(),
            stock: product.stock,
            image_url: product.image_url.clone(),
            category_name: product.category_name.clone(),
        }
    }
}

/// Product list page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
struct ProductsIndexTemplate {
    admin_name: String,
    products: Vec<ProductView>,
    categories: Vec<CategoryView>,
}

/// Product create form fields.
#[derive(Debug, Deserialize)]
pub struct CreateProductForm {
    name: String,
    description: String,
    price: String,
    stock: String,
    #[serde(default)]
    image_url: String,
    category: String,
}

/// Product update form fields (the category stays put).
#[derive(Debug, Deserialize)]
pub struct UpdateProductForm {
    name: String,
    description: String,
    price: String,
    stock: String,
    #[serde(default)]
    image_url: String,
}

/// Build the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product", get(index).post(create))
        .route("/product/edit/{id}", post(update))
        .route("/product/delete/{id}", post(delete))
}

/// GET /product
///
/// Two statements: the product list and the category list that feeds the
/// create form's dropdown.
async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<ProductsIndexTemplate, AppError> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    let categories = CategoryRepository::new(state.pool()).list_all().await?;

    Ok(ProductsIndexTemplate {
        admin_name: admin.name,
        products: products.iter().map(ProductView::from).collect(),
        categories: categories.iter().map(CategoryView::from).collect(),
    })
}

/// POST /product
async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<CreateProductForm>,
) -> Result<Redirect, AppError> {
    if form.name.trim().is_empty() {
        return Err(AppError::BadRequest("Product name is required".to_string()));
    }
    let price = parse_price(&form.price)?;
    let stock = parse_stock(&form.stock)?;

    let category = CategoryRepository::new(state.pool())
        .get_by_name(form.category.trim())
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Category Not Found. Please create category first".to_string())
        })?;

    ProductRepository::new(state.pool())
        .create(
            form.name.trim(),
            form.description.trim(),
            price,
            stock,
            normalize_image_url(&form.image_url),
            category.id,
        )
        .await?;

    Ok(Redirect::to("/product"))
}

/// POST /product/edit/{id}
async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<UpdateProductForm>,
) -> Result<Redirect, AppError> {
    if form.name.trim().is_empty() {
        return Err(AppError::BadRequest("Product name is required".to_string()));
    }
    let price = parse_price(&form.price)?;
    let stock = parse_stock(&form.stock)?;

    ProductRepository::new(state.pool())
        .update(
            ProductId::new(id),
            form.name.trim(),
            form.description.trim(),
            price,
            stock,
            normalize_image_url(&form.image_url),
        )
        .await?;

    Ok(Redirect::to("/product"))
}

/// POST /product/delete/{id}
async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    ProductRepository::new(state.pool())
        .delete(ProductId::new(id))
        .await?;

    Ok(Redirect::to("/product"))
}

fn parse_price(raw: &str) -> Result<Price, AppError> {
    Price::parse(raw).map_err(|e| AppError::BadRequest(format!("Invalid price: {e}")))
}

fn parse_stock(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid stock count: {raw}")))
}

/// An empty image URL field means no image.
fn normalize_image_url(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_valid() {
        assert_eq!(parse_price("19.99").unwrap().display(), "$19.99");
    }

    #[test]
    fn test_parse_price_invalid() {
        assert!(parse_price("free").is_err());
        assert!(parse_price("-5").is_err());
    }

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock(" 12 ").unwrap(), 12);
        assert!(parse_stock("many").is_err());
    }

    #[test]
    fn test_normalize_image_url() {
        assert_eq!(normalize_image_url("  "), None);
        assert_eq!(
            normalize_image_url(" /static/kettle.png "),
            Some("/static/kettle.png")
        );
    }
}
