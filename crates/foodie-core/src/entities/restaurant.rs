use serde::{Deserialize, Serialize};

/// A row of the `restaurants` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub is_veg: bool,
    pub has_outdoor_seating: bool,
    pub is_luxury: bool,
    pub rating: f64,
}

/// Exact-match criteria for `GET /restaurants/filter`. All three flags must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RestaurantFilter {
    pub is_veg: bool,
    pub has_outdoor_seating: bool,
    pub is_luxury: bool,
}

impl RestaurantFilter {
    /// Human-readable phrase for the filter, e.g.
    /// `"Luxurious Veg restaurant with outdoor seating"`.
    #[must_use]
    pub fn describe(&self) -> String {
        let luxury = if self.is_luxury {
            "Luxurious"
        } else {
            "Non Luxurious"
        };
        let veg = if self.is_veg { "Veg" } else { "Non Veg" };
        let seating = if self.has_outdoor_seating {
            "with"
        } else {
            "without"
        };
        format!("{luxury} {veg} restaurant {seating} outdoor seating")
    }
}
