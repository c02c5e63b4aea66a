//! Endpoint handlers, one module per table.

pub mod dishes;
pub mod restaurants;

/// `GET /`
pub async fn welcome() -> &'static str {
    "Welcome to FoodieFinds"
}
