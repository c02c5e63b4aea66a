//! Database error types for foodie-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A row could not be decoded into a catalog entity.
    #[error("Query failed: {0}")]
    Query(String),

    /// Underlying libSQL error (connectivity, malformed SQL, missing table, ...).
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
