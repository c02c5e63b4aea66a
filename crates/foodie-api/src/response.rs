//! Response shaping: turns query-layer results into success payloads or
//! `ApiError::NotFound`.

use crate::error::{ApiError, ApiResult};

/// Pass a non-empty collection through; an empty one becomes a 404 carrying
/// `message()`.
///
/// # Errors
///
/// Returns `ApiError::NotFound` when `rows` is empty.
pub fn non_empty<T>(rows: Vec<T>, message: impl FnOnce() -> String) -> ApiResult<Vec<T>> {
    if rows.is_empty() {
        Err(ApiError::NotFound(message()))
    } else {
        Ok(rows)
    }
}

/// Unwrap a single-row lookup; `None` becomes a 404 carrying `message()`.
///
/// # Errors
///
/// Returns `ApiError::NotFound` when `row` is `None`.
pub fn found<T>(row: Option<T>, message: impl FnOnce() -> String) -> ApiResult<T> {
    row.ok_or_else(|| ApiError::NotFound(message()))
}
