//! Request parameter validation.
//!
//! Path and query parameters arrive as raw strings. They are validated here,
//! before any query runs, so a malformed value is reported as a 400 instead of
//! silently matching nothing.

use foodie_core::entities::RestaurantFilter;
use foodie_core::errors::CoreError;
use foodie_core::flag::Flag;
use serde::Deserialize;

/// Parse an `:id` path segment.
///
/// # Errors
///
/// Returns `CoreError::InvalidId` if `raw` is not a base-10 `i64` in its
/// canonical spelling. A leading `+` is rejected so not-found messages echo
/// exactly what the client sent.
pub fn parse_id(raw: &str) -> Result<i64, CoreError> {
    if raw.starts_with('+') {
        return Err(CoreError::InvalidId(raw.to_string()));
    }
    raw.parse::<i64>().map_err(|_| CoreError::InvalidId(raw.to_string()))
}

/// Raw query string of `GET /restaurants/filter`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFilterParams {
    pub is_veg: Option<String>,
    pub has_outdoor_seating: Option<String>,
    pub is_luxury: Option<String>,
}

impl RestaurantFilterParams {
    /// All three flags are required. The first missing or invalid one is reported.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingParameter` or `CoreError::InvalidFlag`.
    pub fn validate(&self) -> Result<RestaurantFilter, CoreError> {
        Ok(RestaurantFilter {
            is_veg: Flag::require("isVeg", self.is_veg.as_deref())?,
            has_outdoor_seating: Flag::require(
                "hasOutdoorSeating",
                self.has_outdoor_seating.as_deref(),
            )?,
            is_luxury: Flag::require("isLuxury", self.is_luxury.as_deref())?,
        })
    }
}

/// Raw query string of `GET /dishes/filter`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishFilterParams {
    pub is_veg: Option<String>,
}

impl DishFilterParams {
    /// # Errors
    ///
    /// Returns `CoreError::MissingParameter` or `CoreError::InvalidFlag`.
    pub fn validate(&self) -> Result<bool, CoreError> {
        Flag::require("isVeg", self.is_veg.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Ok(1))]
    #[case("999", Ok(999))]
    #[case("-4", Ok(-4))]
    #[case("abc", Err(CoreError::InvalidId("abc".into())))]
    #[case("1.5", Err(CoreError::InvalidId("1.5".into())))]
    #[case("", Err(CoreError::InvalidId(String::new())))]
    #[case("+5", Err(CoreError::InvalidId("+5".into())))]
    fn parse_id_cases(#[case] raw: &str, #[case] expected: Result<i64, CoreError>) {
        assert_eq!(parse_id(raw), expected);
    }

    fn restaurant_params(
        veg: Option<&str>,
        seating: Option<&str>,
        luxury: Option<&str>,
    ) -> RestaurantFilterParams {
        RestaurantFilterParams {
            is_veg: veg.map(str::to_string),
            has_outdoor_seating: seating.map(str::to_string),
            is_luxury: luxury.map(str::to_string),
        }
    }

    #[test]
    fn restaurant_filter_validates_all_flags() {
        let filter = restaurant_params(Some("true"), Some("false"), Some("TRUE"))
            .validate()
            .unwrap();
        assert_eq!(
            filter,
            RestaurantFilter {
                is_veg: true,
                has_outdoor_seating: false,
                is_luxury: true,
            }
        );
    }

    #[test]
    fn restaurant_filter_reports_first_problem() {
        let err = restaurant_params(Some("true"), None, Some("nope"))
            .validate()
            .unwrap_err();
        assert_eq!(err, CoreError::MissingParameter("hasOutdoorSeating".into()));

        let err = restaurant_params(Some("true"), Some("false"), Some("nope"))
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidFlag {
                param: "isLuxury".into(),
                value: "nope".into(),
            }
        );
    }

    #[test]
    fn dish_filter_requires_is_veg() {
        assert_eq!(
            DishFilterParams::default().validate(),
            Err(CoreError::MissingParameter("isVeg".into()))
        );
        let params = DishFilterParams {
            is_veg: Some("false".into()),
        };
        assert_eq!(params.validate(), Ok(false));
    }
}
