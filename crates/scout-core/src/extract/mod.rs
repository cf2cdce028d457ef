//! Extraction stages.
//!
//! Each stage reads the lowercased query (plus, where noted, the output of
//! an earlier stage) and returns what it found. Stages never share mutable
//! state.

pub mod attributes;
pub mod numeric;
pub mod odometer;
pub mod place;
pub mod price;
pub mod vehicle;
pub mod year;

use regex::Regex;

pub use attributes::{detect_category, extract_color, extract_condition};
pub use numeric::{parse_compact, Bounds, RangeMatch, Span};
pub use odometer::{extract_odometer, has_vehicle_context, ODOMETER_FLOOR};
pub use place::{extract_location, LocationMatch};
pub use price::{extract_price, BARE_RANGE_FLOOR};
pub use vehicle::{extract_make, extract_model, MakeMatch, MAX_MODEL_TOKENS};
pub use year::extract_years;

/// Word-bounded literal pattern for a lowercase phrase.
pub(crate) fn whole_word(phrase: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(phrase)))
        .expect("escaped literal is a valid regex")
}

/// Upper-case the first character and lower-case the rest.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Capitalize each whitespace-separated word.
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
