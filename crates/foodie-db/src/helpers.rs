//! Row-to-entity decoding helpers.
//!
//! The catalog is provisioned outside this service, so column storage classes
//! are not guaranteed: flags may be stored as the text `"true"`/`"false"` or as
//! integers, and numeric columns may hold INTEGER or REAL values. These helpers
//! normalise both representations.

use libsql::Value;

use crate::error::DatabaseError;

/// Read a required TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column is NULL or not text.
pub fn get_string(row: &libsql::Row, idx: i32, column: &str) -> Result<String, DatabaseError> {
    match row.get_value(idx)? {
        Value::Text(s) => Ok(s),
        other => Err(unexpected(column, "text", &other)),
    }
}

/// Read a required numeric column as `f64`, accepting INTEGER or REAL storage.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column is NULL or not numeric.
#[allow(clippy::cast_precision_loss)]
pub fn get_number(row: &libsql::Row, idx: i32, column: &str) -> Result<f64, DatabaseError> {
    match row.get_value(idx)? {
        Value::Real(n) => Ok(n),
        Value::Integer(n) => Ok(n as f64),
        Value::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            DatabaseError::Query(format!("column '{column}' holds non-numeric text '{s}'"))
        }),
        other => Err(unexpected(column, "number", &other)),
    }
}

/// Read a boolean-like flag column.
///
/// Text `true`/`1` and `false`/`0` (case-insensitive) and integers (non-zero
/// is true) are accepted.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for NULL, blobs, or unrecognised text.
pub fn get_flag(row: &libsql::Row, idx: i32, column: &str) -> Result<bool, DatabaseError> {
    match row.get_value(idx)? {
        Value::Integer(n) => Ok(n != 0),
        Value::Text(s) => parse_flag_text(&s).ok_or_else(|| {
            DatabaseError::Query(format!("column '{column}' holds non-boolean text '{s}'"))
        }),
        other => Err(unexpected(column, "flag", &other)),
    }
}

/// SQL predicate comparing a flag `column` with the integer placeholder
/// `?{param}` (bound to `1` or `0`), using the same rules as [`get_flag`].
/// Rows [`get_flag`] would reject match neither value.
pub fn flag_matches(column: &str, param: usize) -> String {
    let text = format!("lower(trim({column}, char(32, 9, 10, 13)))");
    format!(
        "(CASE
            WHEN typeof({column}) = 'integer' THEN {column} != 0
            WHEN typeof({column}) = 'text' AND {text} IN ('true', '1') THEN 1
            WHEN typeof({column}) = 'text' AND {text} IN ('false', '0') THEN 0
         END) = ?{param}"
    )
}

fn parse_flag_text(s: &str) -> Option<bool> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") || s == "1" {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") || s == "0" {
        Some(false)
    } else {
        None
    }
}

fn unexpected(column: &str, expected: &str, found: &Value) -> DatabaseError {
    let found = match found {
        Value::Null => "NULL",
        Value::Integer(_) => "integer",
        Value::Real(_) => "real",
        Value::Text(_) => "text",
        Value::Blob(_) => "blob",
    };
    DatabaseError::Query(format!("column '{column}' expected {expected}, found {found}"))
}
