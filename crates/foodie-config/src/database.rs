//! Catalog database configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "./database.sqlite".to_string()
}

const fn default_read_only() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Path to the SQLite/libSQL file holding the `restaurants` and `dishes` tables.
    #[serde(default = "default_path")]
    pub path: String,

    /// Open the connection with `PRAGMA query_only = ON`.
    #[serde(default = "default_read_only")]
    pub read_only: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            read_only: default_read_only(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the path names an in-memory database rather than a file.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
