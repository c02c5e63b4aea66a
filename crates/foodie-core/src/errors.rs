//! Cross-cutting error types for FoodieFinds.
//!
//! Domain-specific errors (`DatabaseError`, `ApiError`, `ConfigError`) live in
//! their respective crates. `CoreError` covers request input that fails
//! validation before any query runs.

use thiserror::Error;

/// Errors that can be raised by any FoodieFinds crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required query parameter was not supplied.
    #[error("Missing required query parameter: {0}")]
    MissingParameter(String),

    /// A boolean-like parameter held something other than `true`/`false`.
    #[error("{value} is the incorrect value passed in the parameter '{param}'.")]
    InvalidFlag { param: String, value: String },

    /// A path id was not an integer.
    #[error("Invalid id '{0}': expected an integer")]
    InvalidId(String),
}
