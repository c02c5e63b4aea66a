//! # foodie-db
//!
//! libSQL query layer for the FoodieFinds catalog.
//!
//! The `restaurants` and `dishes` tables are provisioned externally; this
//! crate only reads them. Every repository method issues exactly one
//! parameter-bound `SELECT` over a single shared connection.

pub mod error;
pub mod helpers;
pub mod repos;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Shared handle to the catalog database.
///
/// Opened once at startup and reused by every request. Holds one libSQL
/// connection; queries are independent and never open transactions.
pub struct CatalogDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CatalogDb {
    /// Open a database file (or `":memory:"`) with a read-write connection.
    ///
    /// No schema is created; the caller is expected to point at a
    /// pre-populated catalog.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        tracing::debug!(path, "catalog database opened");
        Ok(Self { db, conn })
    }

    /// Open a database file and switch the connection to `query_only` mode,
    /// so any statement that would write fails instead of mutating the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the pragma
    /// is rejected.
    pub async fn open_read_only(path: &str) -> Result<Self, DatabaseError> {
        let catalog = Self::open_local(path).await?;
        catalog.conn.execute("PRAGMA query_only = ON", ()).await?;
        Ok(catalog)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
