//! Dish repository.

use foodie_core::entities::Dish;

use crate::CatalogDb;
use crate::error::DatabaseError;
use crate::helpers::{flag_matches, get_flag, get_number, get_string};

const SELECT_DISH: &str = "SELECT id, name, price, isVeg FROM dishes";

fn row_to_dish(row: &libsql::Row) -> Result<Dish, DatabaseError> {
    Ok(Dish {
        id: row.get::<i64>(0)?,
        name: get_string(row, 1, "name")?,
        price: get_number(row, 2, "price")?,
        is_veg: get_flag(row, 3, "isVeg")?,
    })
}

async fn collect(mut rows: libsql::Rows) -> Result<Vec<Dish>, DatabaseError> {
    let mut results = Vec::new();
    while let Some(row) = rows.next().await? {
        results.push(row_to_dish(&row)?);
    }
    Ok(results)
}

impl CatalogDb {
    pub async fn list_dishes(&self) -> Result<Vec<Dish>, DatabaseError> {
        let rows = self
            .conn()
            .query(&format!("{SELECT_DISH} ORDER BY id"), ())
            .await?;
        collect(rows).await
    }

    pub async fn get_dish(&self, id: i64) -> Result<Option<Dish>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("{SELECT_DISH} WHERE id = ?1"), [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_dish(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn filter_dishes(&self, is_veg: bool) -> Result<Vec<Dish>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "{SELECT_DISH} WHERE {} ORDER BY id",
                    flag_matches("isVeg", 1)
                ),
                [i64::from(is_veg)],
            )
            .await?;
        collect(rows).await
    }

    /// Cheapest first; ties keep id order.
    pub async fn dishes_by_price(&self) -> Result<Vec<Dish>, DatabaseError> {
        let rows = self
            .conn()
            .query(&format!("{SELECT_DISH} ORDER BY price ASC, id"), ())
            .await?;
        collect(rows).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{db_with, seeded_db};
    use pretty_assertions::assert_eq;

    fn ids(dishes: &[Dish]) -> Vec<i64> {
        dishes.iter().map(|d| d.id).collect()
    }

    #[tokio::test]
    async fn list_returns_every_row() {
        let db = seeded_db().await;
        assert_eq!(ids(&db.list_dishes().await.unwrap()), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn get_by_id() {
        let db = seeded_db().await;
        let dish = db.get_dish(2).await.unwrap().unwrap();
        assert_eq!(
            dish,
            Dish {
                id: 2,
                name: "Chicken Tikka".into(),
                price: 300.0,
                is_veg: false,
            }
        );
        assert!(db.get_dish(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn filter_by_veg_flag() {
        let db = seeded_db().await;
        let veg = db.filter_dishes(true).await.unwrap();
        assert_eq!(ids(&veg), vec![1, 3]);
        assert!(veg.iter().all(|d| d.is_veg));

        let non_veg = db.filter_dishes(false).await.unwrap();
        assert_eq!(ids(&non_veg), vec![2, 4]);
    }

    #[tokio::test]
    async fn filter_matches_integer_and_mixed_case_flags() {
        let db = db_with(
            "CREATE TABLE dishes (id INTEGER PRIMARY KEY, name TEXT, price REAL, isVeg);
             INSERT INTO dishes VALUES
                (1, 'Salad', 10, 1),
                (2, 'Fish', 5, 0),
                (3, 'Dal', 4, 'TRUE'),
                (4, 'Prawns', 9, 'False');",
        )
        .await;
        let veg = db.filter_dishes(true).await.unwrap();
        assert_eq!(ids(&veg), vec![1, 3]);
        assert!(veg.iter().all(|d| d.is_veg));
        assert_eq!(ids(&db.filter_dishes(false).await.unwrap()), vec![2, 4]);
    }

    #[tokio::test]
    async fn price_sort_is_ascending() {
        let db = seeded_db().await;
        let sorted = db.dishes_by_price().await.unwrap();
        assert_eq!(ids(&sorted), vec![3, 1, 2, 4]);
        assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[tokio::test]
    async fn empty_table_yields_empty_collections() {
        let db = db_with(
            "CREATE TABLE dishes (id INTEGER PRIMARY KEY, name TEXT, price REAL, isVeg TEXT);",
        )
        .await;
        assert!(db.list_dishes().await.unwrap().is_empty());
        assert!(db.filter_dishes(true).await.unwrap().is_empty());
        assert!(db.dishes_by_price().await.unwrap().is_empty());
    }
}
