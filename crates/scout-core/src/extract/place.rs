//! Location stage.

use std::sync::LazyLock;

use regex::Regex;

use super::numeric::Span;
use super::{title_case, whole_word};
use crate::gazetteer::{LOCATIONS, LOCATION_PREPOSITIONS};

struct PlacePattern {
    place: &'static str,
    led: Regex,
    bare: Regex,
}

static PLACE_PATTERNS: LazyLock<Vec<PlacePattern>> = LazyLock::new(|| {
    let prepositions = LOCATION_PREPOSITIONS.join("|");
    LOCATIONS
        .iter()
        .map(|&place| PlacePattern {
            place,
            led: Regex::new(&format!(
                r"\b(?:{prepositions})\s+({})\b",
                regex::escape(place)
            ))
            .expect("static regex: place after preposition"),
            bare: whole_word(place),
        })
        .collect()
});

/// A place found in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMatch {
    /// Title-cased place name
    pub name: String,
    /// Where the place name itself sits in the lowercased query
    pub span: Span,
}

/// Find a gazetteer place in the query.
///
/// The gazetteer order decides between places. For each entry either a
/// mention introduced by a preposition ("in", "near", ...) or a bare one
/// counts; the span prefers the preposition-led occurrence.
pub fn extract_location(lower: &str) -> Option<LocationMatch> {
    let (place, span) = PLACE_PATTERNS.iter().find_map(|p| {
        let led = p.led.captures(lower).and_then(|caps| caps.get(1));
        let found = led.or_else(|| p.bare.find(lower))?;
        Some((p.place, found.range()))
    })?;

    tracing::debug!(place, "location matched");
    Some(LocationMatch {
        name: title_case(place),
        span,
    })
}
