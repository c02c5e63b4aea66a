//! Boolean-like query flags.
//!
//! Clients send `isVeg`, `hasOutdoorSeating`, and `isLuxury` as the text
//! `"true"`/`"false"` in the query string.
//! [`Flag`] classifies a raw parameter at the HTTP boundary so the query layer
//! only ever sees a native `bool`.

use std::fmt;

use crate::errors::CoreError;

/// A raw query-string flag after classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Flag {
    True,
    False,
    /// Anything other than `true`/`false`; keeps the raw text for error messages.
    Invalid(String),
}

impl Flag {
    /// Classify a raw parameter value. Matching is ASCII case-insensitive and
    /// does not trim whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("true") {
            Self::True
        } else if raw.eq_ignore_ascii_case("false") {
            Self::False
        } else {
            Self::Invalid(raw.to_string())
        }
    }

    /// The native boolean, or `None` for [`Flag::Invalid`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Invalid(_) => None,
        }
    }

    /// Validate a named query parameter that must be present and boolean-like.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingParameter` when `raw` is `None` and
    /// `CoreError::InvalidFlag` when it is neither `true` nor `false`.
    pub fn require(param: &str, raw: Option<&str>) -> Result<bool, CoreError> {
        let raw = raw.ok_or_else(|| CoreError::MissingParameter(param.to_string()))?;
        match Self::parse(raw) {
            Self::True => Ok(true),
            Self::False => Ok(false),
            Self::Invalid(value) => Err(CoreError::InvalidFlag {
                param: param.to_string(),
                value,
            }),
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("true"),
            Self::False => f.write_str("false"),
            Self::Invalid(raw) => f.write_str(raw),
        }
    }
}
