/// AQI categorization.
///
/// `categorize` is total: every input, including negative values, lands in
/// exactly one category. The first breakpoint row whose inclusive upper bound
/// admits the index wins, so boundary values belong to the lower-severity
/// category. NaN fails every bounded row and ends up in the open-ended top
/// row.

use serde::Serialize;

use crate::breakpoints::CATEGORY_BREAKPOINTS;
use crate::model::{AirQualityIndex, Category};

/// Category assigned to an index, with its display label and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            category,
            label: category.label(),
            color: category.color(),
        }
    }
}

/// Maps an index onto its category.
pub fn category_of(index: AirQualityIndex) -> Category {
    CATEGORY_BREAKPOINTS
        .iter()
        .find(|b| b.contains(index))
        .map(|b| b.category)
        .unwrap_or(Category::VeryUnhealthy)
}

/// Maps an index onto its category, label and severity color.
pub fn categorize(index: AirQualityIndex) -> CategoryInfo {
    CategoryInfo::from(category_of(index))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_category(index: f64, expected: Category, color: &str) {
        let info = categorize(index);
        assert_eq!(info.category, expected, "index {} category", index);
        assert_eq!(info.color, color, "index {} color", index);
    }

    // --- Boundaries ---------------------------------------------------------

    #[test]
    fn test_boundary_50_is_good() {
        assert_category(50.0, Category::Good, "green");
    }

    #[test]
    fn test_51_is_moderate() {
        assert_category(51.0, Category::Moderate, "orange");
    }

    #[test]
    fn test_boundary_100_is_moderate() {
        assert_category(100.0, Category::Moderate, "orange");
    }

    #[test]
    fn test_101_is_unhealthy_for_sensitive() {
        assert_category(101.0, Category::UnhealthyForSensitive, "red");
    }

    #[test]
    fn test_boundary_150_is_unhealthy_for_sensitive() {
        assert_category(150.0, Category::UnhealthyForSensitive, "red");
    }

    #[test]
    fn test_boundary_200_is_unhealthy() {
        assert_category(200.0, Category::Unhealthy, "purple");
    }

    #[test]
    fn test_201_is_very_unhealthy() {
        assert_category(201.0, Category::VeryUnhealthy, "maroon");
    }

    #[test]
    fn test_fractional_value_just_above_boundary_moves_up() {
        assert_category(50.01, Category::Moderate, "orange");
    }

    // --- Out of range -------------------------------------------------------

    #[test]
    fn test_negative_index_is_good() {
        assert_category(-12.0, Category::Good, "green");
    }

    #[test]
    fn test_huge_index_is_very_unhealthy() {
        assert_category(1.0e9, Category::VeryUnhealthy, "maroon");
    }

    #[test]
    fn test_nan_falls_into_top_category() {
        assert_eq!(category_of(f64::NAN), Category::VeryUnhealthy);
    }

    // --- Totality -----------------------------------------------------------

    #[test]
    fn test_every_sampled_value_matches_exactly_one_range() {
        let mut x = -50.0;
        while x <= 400.0 {
            let category = category_of(x);
            let first_match = CATEGORY_BREAKPOINTS
                .iter()
                .position(|b| b.contains(x))
                .expect("top row is unbounded");
            assert_eq!(CATEGORY_BREAKPOINTS[first_match].category, category);
            // Rows before the first match must all reject the value.
            assert!(CATEGORY_BREAKPOINTS[..first_match].iter().all(|b| !b.contains(x)));
            x += 0.25;
        }
    }

    #[test]
    fn test_label_matches_category() {
        let info = categorize(112.0);
        assert_eq!(info.label, "Unhealthy for Sensitive");
        let info = categorize(78.0);
        assert_eq!(info.label, "Moderate");
    }
}
