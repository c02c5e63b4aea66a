//! # foodie-api
//!
//! Read-only HTTP API over the FoodieFinds catalog.
//!
//! Each endpoint validates its path/query parameters, runs exactly one
//! query-layer call against the shared [`CatalogDb`](foodie_db::CatalogDb),
//! and shapes the result:
//!
//! - non-empty collection / present row → `200` with `{ <key>: ... }`
//! - empty collection / absent row → `404` with `{ message }`
//! - invalid parameter → `400` with `{ error }`
//! - query failure → `500` with `{ error }`
//!
//! # Endpoints
//!
//! - `/` - welcome text
//! - `/restaurants`, `/restaurants/details/:id`, `/restaurants/cuisine/:cuisine`,
//!   `/restaurants/filter`, `/restaurants/sort-by-rating`
//! - `/dishes`, `/dishes/details/:id`, `/dishes/filter`, `/dishes/sort-by-price`

pub mod error;
pub mod params;
pub mod response;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::router;
pub use server::HttpServer;
pub use state::AppState;
