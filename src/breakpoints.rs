/// AQI breakpoint registry.
///
/// Defines the canonical table of category ranges used by the categorizer
/// and the dashboard gauge. This is the single source of truth for category
/// bounds: other modules should reference rows from here rather than
/// hardcoding 50 / 100 / 150 / 200.

use crate::model::{AirQualityIndex, Category};

// ---------------------------------------------------------------------------
// Breakpoint rows
// ---------------------------------------------------------------------------

/// One category range. Bounds are inclusive on the upper side, so a value
/// equal to `upper_bound` belongs to this row rather than the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Highest index in this category, or `None` for the open-ended top row.
    pub upper_bound: Option<AirQualityIndex>,
    pub category: Category,
}

impl Breakpoint {
    pub fn contains(&self, index: AirQualityIndex) -> bool {
        match self.upper_bound {
            Some(bound) => index <= bound,
            None => true,
        }
    }
}

/// All categories ordered from least to most severe. The last row is
/// unbounded and catches everything above 200.
pub static CATEGORY_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint {
        upper_bound: Some(50.0),
        category: Category::Good,
    },
    Breakpoint {
        upper_bound: Some(100.0),
        category: Category::Moderate,
    },
    Breakpoint {
        upper_bound: Some(150.0),
        category: Category::UnhealthyForSensitive,
    },
    Breakpoint {
        upper_bound: Some(200.0),
        category: Category::Unhealthy,
    },
    Breakpoint {
        upper_bound: None,
        category: Category::VeryUnhealthy,
    },
];

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

/// Lower edge of a category's range: the previous row's upper bound, or
/// `None` for the first row. The dashboard gauge builds its bands from this.
pub fn lower_bound_for(category: Category) -> Option<AirQualityIndex> {
    let position = CATEGORY_BREAKPOINTS
        .iter()
        .position(|b| b.category == category)?;
    if position == 0 {
        None
    } else {
        CATEGORY_BREAKPOINTS[position - 1].upper_bound
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_one_row_per_category() {
        assert_eq!(CATEGORY_BREAKPOINTS.len(), 5);
        for (i, a) in CATEGORY_BREAKPOINTS.iter().enumerate() {
            for b in &CATEGORY_BREAKPOINTS[i + 1..] {
                assert_ne!(a.category, b.category, "duplicate row for {:?}", a.category);
            }
        }
    }

    #[test]
    fn test_registry_is_ordered_by_severity_and_bound() {
        for pair in CATEGORY_BREAKPOINTS.windows(2) {
            assert!(
                pair[0].category < pair[1].category,
                "{:?} should precede {:?}",
                pair[0].category,
                pair[1].category
            );
            if let (Some(lo), Some(hi)) = (pair[0].upper_bound, pair[1].upper_bound) {
                assert!(lo < hi, "bounds must increase: {} then {}", lo, hi);
            }
        }
    }

    #[test]
    fn test_only_last_row_is_unbounded() {
        let last = CATEGORY_BREAKPOINTS.len() - 1;
        for (i, row) in CATEGORY_BREAKPOINTS.iter().enumerate() {
            assert_eq!(row.upper_bound.is_none(), i == last, "row {:?}", row.category);
        }
    }

    #[test]
    fn test_upper_bound_is_inclusive() {
        let good = &CATEGORY_BREAKPOINTS[0];
        assert!(good.contains(50.0));
        assert!(!good.contains(50.5));
    }

    #[test]
    fn test_lower_bounds_chain_from_previous_row() {
        assert_eq!(lower_bound_for(Category::Good), None);
        assert_eq!(lower_bound_for(Category::Moderate), Some(50.0));
        assert_eq!(lower_bound_for(Category::VeryUnhealthy), Some(200.0));
    }
}
