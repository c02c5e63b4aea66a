//! Dish endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use foodie_core::responses::{DishResponse, DishesResponse};

use crate::error::ApiResult;
use crate::params::{DishFilterParams, parse_id};
use crate::response::{found, non_empty};
use crate::state::AppState;

const NO_DISHES: &str = "No dishes found";

/// `GET /dishes`
pub async fn list_dishes(State(state): State<AppState>) -> ApiResult<Json<DishesResponse>> {
    let dishes = non_empty(state.db.list_dishes().await?, || NO_DISHES.to_string())?;
    Ok(Json(DishesResponse { dishes }))
}

/// `GET /dishes/details/:id`
pub async fn dish_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DishResponse>> {
    let id = parse_id(&id)?;
    let dish = found(state.db.get_dish(id).await?, || {
        format!("No dish found with id {id}")
    })?;
    Ok(Json(DishResponse { dish }))
}

/// `GET /dishes/filter?isVeg=`
pub async fn filter_dishes(
    State(state): State<AppState>,
    Query(params): Query<DishFilterParams>,
) -> ApiResult<Json<DishesResponse>> {
    let is_veg = params.validate()?;
    let dishes = non_empty(state.db.filter_dishes(is_veg).await?, || {
        let kind = if is_veg { "Veg" } else { "Non-Veg" };
        format!("{kind} dishes not found")
    })?;
    Ok(Json(DishesResponse { dishes }))
}

/// `GET /dishes/sort-by-price`
pub async fn dishes_by_price(State(state): State<AppState>) -> ApiResult<Json<DishesResponse>> {
    let dishes = non_empty(state.db.dishes_by_price().await?, || NO_DISHES.to_string())?;
    Ok(Json(DishesResponse { dishes }))
}
