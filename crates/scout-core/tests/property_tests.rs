//! Property-based tests for interpretation invariants.
//!
//! Phrases are assembled from the same vocabulary the interpreter knows
//! (makes, places, numbers with suffixes, comparison words) mixed with
//! arbitrary text, so every stage gets exercised.

use proptest::prelude::*;
use scout_core::gazetteer::{COLORS, LOCATIONS, MAKES};
use scout_core::{interpret, SearchFilters};

/// Strategy for one phrase fragment.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(MAKES).prop_map(str::to_string),
        prop::sample::select(LOCATIONS).prop_map(str::to_string),
        prop::sample::select(COLORS).prop_map(str::to_string),
        prop::sample::select(vec![
            "under", "below", "over", "above", "less than", "more than", "between", "and",
            "after", "before", "since", "until", "from", "to", "-", "or below", "near", "in",
            "cars", "ute", "km", "kms", "mileage", "$", "like new", "used", "find me",
        ])
        .prop_map(str::to_string),
        (1u32..3000, prop::option::of(prop::sample::select(vec!["k", "m", ",000"])))
            .prop_map(|(n, suffix)| format!("{n}{}", suffix.unwrap_or(""))),
        (1900u32..2100).prop_map(|y| y.to_string()),
        "[a-zA-Z0-9$ ,.-]{0,12}",
    ]
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..10).prop_map(|parts| parts.join(" "))
}

fn bounds_ordered(filters: &SearchFilters) -> bool {
    let ordered = |lo: Option<u64>, hi: Option<u64>| match (lo, hi) {
        (Some(lo), Some(hi)) => lo <= hi,
        _ => true,
    };
    ordered(filters.year_min.map(u64::from), filters.year_max.map(u64::from))
        && ordered(filters.price_min, filters.price_max)
        && ordered(filters.odometer_min, filters.odometer_max)
}

proptest! {
    /// Property: the residual query is never empty.
    #[test]
    fn prop_query_never_empty(input in phrase()) {
        prop_assert!(!interpret(&input).filters.query.is_empty());
    }

    /// Property: arbitrary unicode never panics and keeps the original.
    #[test]
    fn prop_total_on_any_string(input in any::<String>()) {
        let parsed = interpret(&input);
        prop_assert_eq!(parsed.original_query, input);
        prop_assert!(!parsed.filters.query.is_empty());
    }

    /// Property: a model is only reported together with a make.
    #[test]
    fn prop_model_implies_make(input in phrase()) {
        let filters = interpret(&input).filters;
        prop_assert!(filters.model.is_none() || filters.make.is_some());
    }

    /// Property: every bound pair is ordered.
    #[test]
    fn prop_bounds_ordered(input in phrase()) {
        let filters = interpret(&input).filters;
        prop_assert!(bounds_ordered(&filters), "unordered bounds: {:?}", filters);
    }

    /// Property: reinterpreting the original phrase gives the same result.
    #[test]
    fn prop_idempotent(input in phrase()) {
        let first = interpret(&input);
        let second = interpret(&first.original_query);
        prop_assert_eq!(first, second);
    }

    /// Property: the category filter is never populated.
    #[test]
    fn prop_category_unset(input in phrase()) {
        prop_assert!(interpret(&input).filters.category.is_none());
    }

    /// Property: a small bare `<N>k` with no unit and no vehicle words is a
    /// price, never a distance.
    #[test]
    fn prop_small_budget_is_price(
        n in 1u64..50,
        keyword in prop::sample::select(vec![
            "under", "below", "less than", "over", "above", "more than",
        ]),
        noun in prop::sample::select(vec!["laptop", "sofa", "guitar", "camera", "bike"]),
    ) {
        let filters = interpret(&format!("{noun} {keyword} {n}k")).filters;
        prop_assert_eq!(filters.odometer_min, None);
        prop_assert_eq!(filters.odometer_max, None);
        let price = filters.price_min.or(filters.price_max);
        prop_assert_eq!(price, Some(n * 1_000));
    }

    /// Property: the same threshold stays a price in a vehicle query when it is
    /// below the odometer floor.
    #[test]
    fn prop_small_vehicle_budget_is_price(n in 1u64..50) {
        let filters = interpret(&format!("cars under {n}k")).filters;
        prop_assert_eq!(filters.odometer_max, None);
        prop_assert_eq!(filters.price_max, Some(n * 1_000));
    }

    /// Property: at or above the floor, a vehicle query reads it as distance.
    #[test]
    fn prop_large_vehicle_figure_is_odometer(n in 50u64..999) {
        let filters = interpret(&format!("ute under {n}k")).filters;
        prop_assert_eq!(filters.odometer_max, Some(n * 1_000));
        prop_assert_eq!(filters.price_max, None);
    }
}
