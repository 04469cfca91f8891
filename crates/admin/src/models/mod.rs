//! Domain models for the admin panel.

pub mod category;
pub mod product;
pub mod session;
pub mod user;

pub use category::Category;
pub use product::{Product, ProductListing};
pub use session::{CurrentAdmin, keys as session_keys};
pub use user::User;
