//! Catalog entity structs.
//!
//! Both tables are owned by the external data store; these types are
//! read-only projections of a single row.

mod dish;
mod restaurant;

pub use dish::Dish;
pub use restaurant::{Restaurant, RestaurantFilter};
