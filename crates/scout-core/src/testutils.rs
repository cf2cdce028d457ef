//! Test utilities for Scout.
//!
//! Provides reusable phrase fixtures and filter assertions.

use crate::filters::SearchFilters;
use crate::interpret;

/// Phrases exercising every stage at least once.
pub struct TestPhrases;

impl TestPhrases {
    /// A phrase that sets make, model, year, odometer and location.
    pub fn full_vehicle() -> &'static str {
        "Find me Lexus CT200h after 2012 with 100k or below mileage near Auckland"
    }

    /// Phrases that must not produce any structured filter.
    pub fn plain_keywords() -> &'static [&'static str] {
        &["wooden lamp", "sony camera", "hello world", "!!!"]
    }
}

/// Interpret a phrase and keep only the filters.
pub fn filters_of(phrase: &str) -> SearchFilters {
    interpret(phrase).filters
}

/// Assert that every numeric bound is unset except those named in `except`.
pub fn assert_no_numeric_bounds(filters: &SearchFilters, except: &[&str]) {
    let bounds = [
        ("year_min", filters.year_min.map(u64::from)),
        ("year_max", filters.year_max.map(u64::from)),
        ("price_min", filters.price_min),
        ("price_max", filters.price_max),
        ("odometer_min", filters.odometer_min),
        ("odometer_max", filters.odometer_max),
    ];
    for (name, value) in bounds {
        if !except.contains(&name) {
            assert_eq!(value, None, "{name} should be unset in {filters:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_vehicle_fixture() {
        let filters = filters_of(TestPhrases::full_vehicle());
        assert_eq!(filters.make.as_deref(), Some("Lexus"));
        assert_no_numeric_bounds(&filters, &["year_min", "odometer_max"]);
    }

    #[test]
    fn test_plain_keyword_fixtures() {
        for phrase in TestPhrases::plain_keywords() {
            let filters = filters_of(phrase);
            assert!(!filters.has_structured_filters(), "{phrase:?} -> {filters:?}");
            assert_eq!(filters.query, *phrase);
        }
    }
}
