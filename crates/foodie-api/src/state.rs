//! Shared state for API handlers.

use std::sync::Arc;

use foodie_db::CatalogDb;

/// Handle passed to every handler through axum's `State` extractor.
///
/// Wraps the single catalog connection opened at startup. Tests build one
/// around an in-memory database.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<CatalogDb>,
}

impl AppState {
    /// Creates state owning the given catalog handle.
    #[must_use]
    pub fn new(db: CatalogDb) -> Self {
        Self { db: Arc::new(db) }
    }
}
