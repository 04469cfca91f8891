//! Public landing and about pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, routing::get};

use crate::filters;
use crate::middleware::OptionalAdminAuth;
use crate::state::AppState;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {
    logged_in: bool,
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
struct AboutTemplate;

/// Build the public pages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
}

/// GET /
async fn index(OptionalAdminAuth(admin): OptionalAdminAuth) -> IndexTemplate {
    IndexTemplate {
        logged_in: admin.is_some(),
    }
}

/// GET /about
async fn about() -> AboutTemplate {
    AboutTemplate
}
