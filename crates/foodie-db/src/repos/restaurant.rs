//! Restaurant repository.

use foodie_core::entities::{Restaurant, RestaurantFilter};

use crate::CatalogDb;
use crate::error::DatabaseError;
use crate::helpers::{flag_matches, get_flag, get_number, get_string};

const SELECT_RESTAURANT: &str =
    "SELECT id, name, cuisine, isVeg, hasOutdoorSeating, isLuxury, rating FROM restaurants";

fn row_to_restaurant(row: &libsql::Row) -> Result<Restaurant, DatabaseError> {
    Ok(Restaurant {
        id: row.get::<i64>(0)?,
        name: get_string(row, 1, "name")?,
        cuisine: get_string(row, 2, "cuisine")?,
        is_veg: get_flag(row, 3, "isVeg")?,
        has_outdoor_seating: get_flag(row, 4, "hasOutdoorSeating")?,
        is_luxury: get_flag(row, 5, "isLuxury")?,
        rating: get_number(row, 6, "rating")?,
    })
}

async fn collect(mut rows: libsql::Rows) -> Result<Vec<Restaurant>, DatabaseError> {
    let mut results = Vec::new();
    while let Some(row) = rows.next().await? {
        results.push(row_to_restaurant(&row)?);
    }
    Ok(results)
}

impl CatalogDb {
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, DatabaseError> {
        let rows = self
            .conn()
            .query(&format!("{SELECT_RESTAURANT} ORDER BY id"), ())
            .await?;
        collect(rows).await
    }

    pub async fn get_restaurant(&self, id: i64) -> Result<Option<Restaurant>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("{SELECT_RESTAURANT} WHERE id = ?1"), [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_restaurant(&row)?)),
            None => Ok(None),
        }
    }

    /// Exact, case-sensitive match on `cuisine`.
    pub async fn restaurants_by_cuisine(
        &self,
        cuisine: &str,
    ) -> Result<Vec<Restaurant>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!("{SELECT_RESTAURANT} WHERE cuisine = ?1 ORDER BY id"),
                [cuisine],
            )
            .await?;
        collect(rows).await
    }

    pub async fn filter_restaurants(
        &self,
        filter: &RestaurantFilter,
    ) -> Result<Vec<Restaurant>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "{SELECT_RESTAURANT} WHERE {} AND {} AND {} ORDER BY id",
                    flag_matches("isVeg", 1),
                    flag_matches("hasOutdoorSeating", 2),
                    flag_matches("isLuxury", 3)
                ),
                libsql::params![
                    i64::from(filter.is_veg),
                    i64::from(filter.has_outdoor_seating),
                    i64::from(filter.is_luxury)
                ],
            )
            .await?;
        collect(rows).await
    }

    /// Highest rating first; ties keep id order.
    pub async fn restaurants_by_rating(&self) -> Result<Vec<Restaurant>, DatabaseError> {
        let rows = self
            .conn()
            .query(&format!("{SELECT_RESTAURANT} ORDER BY rating DESC, id"), ())
            .await?;
        collect(rows).await
    }
}
