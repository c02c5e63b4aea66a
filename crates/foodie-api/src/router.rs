//! Route table.

use axum::Router;
use axum::routing::get;

use crate::routes::{dishes, restaurants, welcome};
use crate::state::AppState;

/// Build the catalog router. Every route is a `GET`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/restaurants", get(restaurants::list_restaurants))
        .route(
            "/restaurants/details/:id",
            get(restaurants::restaurant_details),
        )
        .route(
            "/restaurants/cuisine/:cuisine",
            get(restaurants::restaurants_by_cuisine),
        )
        .route("/restaurants/filter", get(restaurants::filter_restaurants))
        .route(
            "/restaurants/sort-by-rating",
            get(restaurants::restaurants_by_rating),
        )
        .route("/dishes", get(dishes::list_dishes))
        .route("/dishes/details/:id", get(dishes::dish_details))
        .route("/dishes/filter", get(dishes::filter_dishes))
        .route("/dishes/sort-by-price", get(dishes::dishes_by_price))
        .with_state(state)
}
