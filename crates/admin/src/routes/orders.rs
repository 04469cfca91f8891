//! Post-login landing page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, routing::get};

use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Landing page template for signed-in admins.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
struct OrdersIndexTemplate {
    admin_name: String,
}

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new().route("/order", get(index))
}

/// GET /order
///
/// No database round trip; everything shown comes from the session snapshot.
async fn index(RequireAdminAuth(admin): RequireAdminAuth) -> OrdersIndexTemplate {
    OrdersIndexTemplate {
        admin_name: admin.name,
    }
}
