//! Read-only repositories for the catalog tables.
//!
//! All methods are implemented as `impl CatalogDb`, one file per table.
//! Collection queries return an empty `Vec` when nothing matches; by-id
//! lookups return `None`. Deciding what an empty result means is left to the
//! HTTP layer.

pub mod dish;
pub mod restaurant;
