//! Shared test utilities for foodie-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::CatalogDb;

    /// Schema plus five restaurants and four dishes.
    pub const CATALOG_FIXTURE: &str = include_str!("../fixtures/catalog.sql");

    /// In-memory catalog seeded from the shared fixture.
    pub async fn seeded_db() -> CatalogDb {
        let db = CatalogDb::open_local(":memory:").await.unwrap();
        db.conn().execute_batch(CATALOG_FIXTURE).await.unwrap();
        db
    }

    /// In-memory catalog seeded from ad-hoc SQL.
    pub async fn db_with(sql: &str) -> CatalogDb {
        let db = CatalogDb::open_local(":memory:").await.unwrap();
        db.conn().execute_batch(sql).await.unwrap();
        db
    }
}
