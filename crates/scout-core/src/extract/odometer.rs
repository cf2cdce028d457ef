//! Odometer (distance/usage) range stage.
//!
//! Runs before the price stage: anything claimed here is off limits to
//! price. A figure only becomes an odometer bound when it carries a
//! distance unit, sits in a "100k or below" construction, or is at least
//! [`ODOMETER_FLOOR`] in a query about vehicles or mileage.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::numeric::{parse_compact, preceded_by_currency, RangeMatch, DISTANCE_UNIT, NUMBER};
use crate::gazetteer::{MILEAGE_CONTEXT, VEHICLE_CONTEXT};

/// Smallest bare `<N>k` figure read as a distance without a unit.
pub const ODOMETER_FLOOR: u64 = 50_000;

static OR_BELOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b{NUMBER}k\s+(?:or\s+)?(?:below|under|less)(?:\s+{DISTANCE_UNIT})?\b"
    ))
    .expect("static regex: or below")
});

static UNDER_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:under|below|less\s+than)\s+{NUMBER}\s*(k)?\s*{DISTANCE_UNIT}\b"
    ))
    .expect("static regex: under with unit")
});

static OVER_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:over|above|more\s+than)\s+{NUMBER}\s*(k)?\s*{DISTANCE_UNIT}\b"
    ))
    .expect("static regex: over with unit")
});

static UNDER_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:under|below|less\s+than)\s+{NUMBER}k\b"))
        .expect("static regex: under bare")
});

static OVER_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:over|above|more\s+than)\s+{NUMBER}k\b"))
        .expect("static regex: over bare")
});

static CONTEXT: LazyLock<Regex> = LazyLock::new(|| {
    let vehicles = VEHICLE_CONTEXT.join("|");
    let mileage = MILEAGE_CONTEXT.join("|");
    Regex::new(&format!(r"\b(?:(?:{vehicles})s?|{mileage})\b")).expect("static regex: context")
});

fn value_of(caps: &Captures<'_>, scaled: bool) -> Option<u64> {
    let number = caps.get(1)?.as_str();
    let suffix = if scaled { Some("k") } else { caps.get(2).map(|m| m.as_str()) };
    parse_compact(number, suffix)
}

/// Whether the query talks about vehicles or mileage.
pub fn has_vehicle_context(lower: &str) -> bool {
    CONTEXT.is_match(lower)
}

/// Find the odometer bounds in a lowercased query.
pub fn extract_odometer(lower: &str) -> RangeMatch<u64> {
    let mut found = RangeMatch::default();

    for caps in OR_BELOW.captures_iter(lower) {
        let (Some(value), Some(whole)) = (value_of(&caps, true), caps.get(0)) else {
            continue;
        };
        if preceded_by_currency(lower, whole.start()) {
            continue;
        }
        found.bounds.offer_max(value);
        found.claim(whole.range());
        break;
    }

    if found.bounds.max.is_none() {
        if let Some(caps) = UNDER_WITH_UNIT.captures(lower) {
            if let (Some(value), Some(whole)) = (value_of(&caps, false), caps.get(0)) {
                found.bounds.offer_max(value);
                found.claim(whole.range());
            }
        }
    }

    if let Some(caps) = OVER_WITH_UNIT.captures(lower) {
        if let (Some(value), Some(whole)) = (value_of(&caps, false), caps.get(0)) {
            if found.bounds.offer_min(value) {
                found.claim(whole.range());
            } else {
                tracing::trace!(value, "odometer minimum would invert the range, dropped");
            }
        }
    }

    if found.bounds.is_empty() && has_vehicle_context(lower) {
        for (pattern, is_max) in [(&*UNDER_BARE, true), (&*OVER_BARE, false)] {
            let Some(caps) = pattern.captures(lower) else {
                continue;
            };
            let (Some(value), Some(whole)) = (value_of(&caps, true), caps.get(0)) else {
                continue;
            };
            if value < ODOMETER_FLOOR {
                tracing::trace!(value, "bare figure below the odometer floor, left to price");
                continue;
            }
            let accepted = if is_max {
                found.bounds.offer_max(value)
            } else {
                found.bounds.offer_min(value)
            };
            if accepted {
                found.claim(whole.range());
            }
        }
    }

    if !found.bounds.is_empty() {
        tracing::debug!(min = ?found.bounds.min, max = ?found.bounds.max, "odometer range");
    }
    found
}
