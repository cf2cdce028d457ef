//! Search phrase interpretation.

use crate::cleaner::clean_query;
use crate::extract::{
    extract_color, extract_condition, extract_location, extract_make, extract_model,
    extract_odometer, extract_price, extract_years, Span,
};
use crate::filters::{ParsedQuery, SearchFilters};

/// Separator between fragments of the "interpreted as" summary.
pub const SUMMARY_SEPARATOR: &str = " · ";

impl ParsedQuery {
    /// Interpret a free-text search phrase.
    ///
    /// Example: "Find me Lexus CT200h after 2012 near Auckland"
    pub fn parse(input: &str) -> Self {
        let lower = input.to_lowercase();

        let make = extract_make(&lower);
        let model = extract_model(&lower, make.as_ref());
        let years = extract_years(&lower);
        let odometer = extract_odometer(&lower);
        let claimed: Vec<Span> = years
            .spans
            .iter()
            .chain(odometer.spans.iter())
            .cloned()
            .collect();
        let price = extract_price(&lower, &claimed);
        let location = extract_location(&lower);
        let color = extract_color(&lower);
        let condition = extract_condition(&lower);

        let filters = SearchFilters {
            make: make.map(|m| m.name),
            model,
            year_min: years.bounds.min,
            year_max: years.bounds.max,
            price_min: price.bounds.min,
            price_max: price.bounds.max,
            odometer_min: odometer.bounds.min,
            odometer_max: odometer.bounds.max,
            location: location.map(|l| l.name),
            color,
            condition: condition.into_iter().collect(),
            category: None,
            query: clean_query(input),
        };

        let interpreted_as = summarize(&filters);
        tracing::debug!(query = %filters.query, summary = ?interpreted_as, "interpreted");

        ParsedQuery {
            filters,
            interpreted_as,
            original_query: input.to_string(),
        }
    }
}

/// Interpret a free-text search phrase. Same as [`ParsedQuery::parse`].
pub fn interpret(input: &str) -> ParsedQuery {
    ParsedQuery::parse(input)
}

/// Build the "Label: value" summary of the set filters.
pub fn summarize(filters: &SearchFilters) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(ref make) = filters.make {
        parts.push(format!("Make: {make}"));
    }
    if let Some(ref model) = filters.model {
        parts.push(format!("Model: {model}"));
    }
    if let Some(years) = describe_range(filters.year_min, filters.year_max, |y| y.to_string()) {
        parts.push(format!("Year: {years}"));
    }
    if let Some(price) = describe_range(filters.price_min, filters.price_max, |p| {
        format!("${}", group_thousands(p))
    }) {
        parts.push(format!("Price: {price}"));
    }
    if let Some(distance) = describe_range(filters.odometer_min, filters.odometer_max, |d| {
        format!("{} km", group_thousands(d))
    }) {
        parts.push(format!("Odometer: {distance}"));
    }
    if let Some(ref location) = filters.location {
        parts.push(format!("Location: {location}"));
    }
    if let Some(ref color) = filters.color {
        parts.push(format!("Color: {color}"));
    }
    if !filters.condition.is_empty() {
        let labels: Vec<&str> = filters.condition.iter().map(|c| c.as_str()).collect();
        parts.push(format!("Condition: {}", labels.join(", ")));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(SUMMARY_SEPARATOR))
    }
}

fn describe_range<T: Copy + PartialEq>(
    min: Option<T>,
    max: Option<T>,
    show: impl Fn(T) -> String,
) -> Option<String> {
    match (min, max) {
        (Some(lo), Some(hi)) if lo == hi => Some(show(lo)),
        (Some(lo), Some(hi)) => Some(format!("{}-{}", show(lo), show(hi))),
        (Some(lo), None) => Some(format!("from {}", show(lo))),
        (None, Some(hi)) => Some(format!("up to {}", show(hi))),
        (None, None) => None,
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
