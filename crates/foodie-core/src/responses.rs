//! JSON envelopes returned by the HTTP API.
//!
//! Every success body wraps its payload under a single key named after the
//! table (`restaurants`, `dish`, ...). Not-found bodies carry `message`;
//! validation and infrastructure failures carry `error`.

use serde::{Deserialize, Serialize};

use crate::entities::{Dish, Restaurant};

/// Body of every restaurant collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantsResponse {
    pub restaurants: Vec<Restaurant>,
}

/// Body of `GET /restaurants/details/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantResponse {
    pub restaurant: Restaurant,
}

/// Body of every dish collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DishesResponse {
    pub dishes: Vec<Dish>,
}

/// Body of `GET /dishes/details/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DishResponse {
    pub dish: Dish,
}

/// Not-found body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Bad-request and internal-error body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
