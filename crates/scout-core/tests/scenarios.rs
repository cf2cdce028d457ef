//! End-to-end interpretation scenarios.
//!
//! Each test feeds a full search phrase through `interpret` and checks the
//! complete filter record.

use scout_core::{interpret, Condition, SearchFilters, MATCH_ALL};

fn expected(query: &str) -> SearchFilters {
    SearchFilters {
        query: query.to_string(),
        ..Default::default()
    }
}

/// Make and model only.
#[test]
fn test_make_and_model() {
    let parsed = interpret("Toyota Camry");
    assert_eq!(
        parsed.filters,
        SearchFilters {
            make: Some("Toyota".into()),
            model: Some("camry".into()),
            ..expected("Camry")
        }
    );
}

/// The full vehicle phrase: make, model, year, odometer and location.
#[test]
fn test_full_vehicle_phrase() {
    let parsed =
        interpret("Find me Lexus CT200h after 2012 with 100k or below mileage near Auckland");
    assert_eq!(
        parsed.filters,
        SearchFilters {
            make: Some("Lexus".into()),
            model: Some("ct200h".into()),
            year_min: Some(2012),
            odometer_max: Some(100_000),
            location: Some("Auckland".into()),
            ..expected("CT200h after 2012 with 100k or below mileage")
        }
    );
    assert_eq!(
        parsed.interpreted_as.as_deref(),
        Some("Make: Lexus · Model: ct200h · Year: from 2012 · Odometer: up to 100,000 km · Location: Auckland")
    );
}

/// A currency amount is a budget even with vehicle words around it.
#[test]
fn test_dollar_budget_is_price() {
    let filters = interpret("Cars under $20k").filters;
    assert_eq!(filters.price_max, Some(20_000));
    assert_eq!(filters.odometer_max, None);
    assert_eq!(filters.query, "Cars");
}

/// A large bare figure in a vehicle query is a distance.
#[test]
fn test_large_bare_figure_is_odometer() {
    let filters = interpret("Cars under 150k").filters;
    assert_eq!(filters.odometer_max, Some(150_000));
    assert_eq!(filters.price_max, None);
}

/// A year pair is never reread as a price pair.
#[test]
fn test_year_range_not_price() {
    let filters = interpret("Cars 2015-2020").filters;
    assert_eq!(filters.year_min, Some(2015));
    assert_eq!(filters.year_max, Some(2020));
    assert_eq!(filters.price_min, None);
    assert_eq!(filters.price_max, None);
}

/// Electronics brands are neither makes nor stripped from the query.
#[test]
fn test_sony_camera() {
    let parsed = interpret("Sony camera");
    assert_eq!(parsed.filters.make, None);
    assert!(parsed.filters.query.to_lowercase().contains("sony"));
    assert_eq!(parsed.interpreted_as, None);
}

/// Empty and blank input degrade to the match-all query.
#[test]
fn test_empty_and_blank_input() {
    for input in ["", "   ", "\t\n"] {
        let parsed = interpret(input);
        assert_eq!(parsed.filters, expected(MATCH_ALL));
        assert_eq!(parsed.interpreted_as, None);
        assert_eq!(parsed.original_query, input);
    }
}

/// Filler-only text keeps the original wording as the query.
#[test]
fn test_filler_only_input() {
    let parsed = interpret("find me the");
    assert_eq!(parsed.filters, expected("find me the"));
}

/// Non-vehicle listings with price, color, condition and location.
#[test]
fn test_general_listing() {
    let parsed = interpret("Like new black leather sofa under $800 in Christchurch");
    assert_eq!(
        parsed.filters,
        SearchFilters {
            price_max: Some(800),
            location: Some("Christchurch".into()),
            color: Some("Black".into()),
            condition: vec![Condition::LikeNew],
            ..expected("black leather sofa")
        }
    );
    assert_eq!(
        parsed.interpreted_as.as_deref(),
        Some("Price: up to $800 · Location: Christchurch · Color: Black · Condition: Like New")
    );
}

/// Explicit unit, minimum price and exact year together.
#[test]
fn test_mixed_numeric_phrase() {
    let filters = interpret("2018 subaru outback under 80,000 km over $15k").filters;
    assert_eq!(filters.make.as_deref(), Some("Subaru"));
    assert_eq!(filters.model.as_deref(), Some("outback"));
    assert_eq!((filters.year_min, filters.year_max), (Some(2018), Some(2018)));
    assert_eq!(filters.price_min, Some(15_000));
    assert_eq!(filters.odometer_max, Some(80_000));
    assert_eq!(filters.price_max, None);
}

/// "between" keeps written order; bare dashes reorder by magnitude.
#[test]
fn test_price_pair_forms() {
    let between = interpret("bike between $300 and $900").filters;
    assert_eq!((between.price_min, between.price_max), (Some(300), Some(900)));

    let dashed = interpret("kayak $2,500-$1,200").filters;
    assert_eq!((dashed.price_min, dashed.price_max), (Some(1_200), Some(2_500)));
    assert_eq!(dashed.query, "kayak");

    let bare = interpret("bikes 5000 to 8000").filters;
    assert_eq!((bare.price_min, bare.price_max), (Some(5_000), Some(8_000)));
    assert_eq!(bare.query, "bikes");

    let bare = interpret("sofa 1500-2500").filters;
    assert_eq!((bare.price_min, bare.price_max), (Some(1_500), Some(2_500)));
    assert_eq!(bare.query, "sofa");
}

/// Condition triggers are plain substrings, so they also fire inside words
/// and place names; the cleaner still only strips whole phrases.
#[test]
fn test_condition_triggers_are_substrings() {
    let filters = interpret("classical guitar").filters;
    assert_eq!(filters.condition, vec![Condition::LikeNew]);
    assert_eq!(filters.query, "classical guitar");

    let filters = interpret("renewed sofa").filters;
    assert_eq!(filters.condition, vec![Condition::New]);

    let filters = interpret("mower in New Plymouth").filters;
    assert_eq!(filters.location.as_deref(), Some("New Plymouth"));
    assert_eq!(filters.condition, vec![Condition::New]);
    assert_eq!(filters.query, "mower");
}

/// The earlier gazetteer place wins even when a later one follows "in".
#[test]
fn test_location_follows_gazetteer_order() {
    let filters = interpret("hamilton tyres in dunedin").filters;
    assert_eq!(filters.location.as_deref(), Some("Hamilton"));
}

/// The serialized form is what the URL builder and API consumers see.
#[test]
fn test_json_shape() {
    let parsed = interpret("silver honda jazz under $9k near Tauranga");
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json["filters"]["make"], "Honda");
    assert_eq!(json["filters"]["model"], "jazz");
    assert_eq!(json["filters"]["priceMax"], 9_000);
    assert_eq!(json["filters"]["color"], "Silver");
    assert_eq!(json["filters"]["location"], "Tauranga");
    assert_eq!(json["originalQuery"], "silver honda jazz under $9k near Tauranga");
    assert!(json["filters"].get("category").is_none());
    assert!(json["interpretedAs"].is_string());
}
