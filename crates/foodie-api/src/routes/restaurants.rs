//! Restaurant endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use foodie_core::responses::{RestaurantResponse, RestaurantsResponse};

use crate::error::ApiResult;
use crate::params::{RestaurantFilterParams, parse_id};
use crate::response::{found, non_empty};
use crate::state::AppState;

const NO_RESTAURANTS: &str = "No restaurants found";

/// `GET /restaurants`
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> ApiResult<Json<RestaurantsResponse>> {
    let restaurants = state.db.list_restaurants().await?;
    let restaurants = non_empty(restaurants, || NO_RESTAURANTS.to_string())?;
    Ok(Json(RestaurantsResponse { restaurants }))
}

/// `GET /restaurants/details/:id`
pub async fn restaurant_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RestaurantResponse>> {
    let id = parse_id(&id)?;
    let restaurant = state.db.get_restaurant(id).await?;
    let restaurant = found(restaurant, || format!("No restaurant found with id {id}"))?;
    Ok(Json(RestaurantResponse { restaurant }))
}

/// `GET /restaurants/cuisine/:cuisine`
pub async fn restaurants_by_cuisine(
    State(state): State<AppState>,
    Path(cuisine): Path<String>,
) -> ApiResult<Json<RestaurantsResponse>> {
    let restaurants = state.db.restaurants_by_cuisine(&cuisine).await?;
    let restaurants = non_empty(restaurants, || {
        format!("No restaurant found with {cuisine} cuisine")
    })?;
    Ok(Json(RestaurantsResponse { restaurants }))
}

/// `GET /restaurants/filter?isVeg=&hasOutdoorSeating=&isLuxury=`
pub async fn filter_restaurants(
    State(state): State<AppState>,
    Query(params): Query<RestaurantFilterParams>,
) -> ApiResult<Json<RestaurantsResponse>> {
    let filter = params.validate()?;
    let restaurants = state.db.filter_restaurants(&filter).await?;
    let restaurants = non_empty(restaurants, || format!("{} not found", filter.describe()))?;
    Ok(Json(RestaurantsResponse { restaurants }))
}

/// `GET /restaurants/sort-by-rating`
pub async fn restaurants_by_rating(
    State(state): State<AppState>,
) -> ApiResult<Json<RestaurantsResponse>> {
    let restaurants = state.db.restaurants_by_rating().await?;
    let restaurants = non_empty(restaurants, || NO_RESTAURANTS.to_string())?;
    Ok(Json(RestaurantsResponse { restaurants }))
}
