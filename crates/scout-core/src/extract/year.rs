//! Year range stage.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::numeric::{followed_by_distance_unit, preceded_by_currency, RangeMatch};

const YEAR: &str = r"((?:19|20)\d{2})";

static AFTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:after|since|from)\s+{YEAR}\b")).expect("static regex: after year")
});

static BEFORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:before|until)\s+{YEAR}\b")).expect("static regex: before year")
});

static PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{YEAR}\s*(?:-|to)\s*{YEAR}\b")).expect("static regex: year pair")
});

static BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\b{YEAR}\b")).expect("static regex: bare year"));

/// Words after which a 4-digit number reads as an amount, not a year.
const AMOUNT_LEADS: &[&str] = &["under", "below", "than", "over", "above", "between", "and"];

fn year_at(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// Find the year bounds in a lowercased query.
///
/// `after|since|from Y` sets the minimum and `before|until Y` the maximum.
/// An explicit `Y1-Y2` / `Y1 to Y2` pair fills whichever bounds are still
/// unset, in written order, and is ignored when descending. A lone year
/// sets both bounds only when nothing else matched.
pub fn extract_years(lower: &str) -> RangeMatch<u32> {
    let mut found = RangeMatch::default();

    if let Some(caps) = AFTER.captures(lower) {
        if let (Some(year), Some(whole)) = (year_at(&caps, 1), caps.get(0)) {
            found.bounds.offer_min(year);
            found.claim(whole.range());
        }
    }

    if let Some(caps) = BEFORE.captures(lower) {
        if let (Some(year), Some(whole)) = (year_at(&caps, 1), caps.get(0)) {
            if found.bounds.offer_max(year) {
                found.claim(whole.range());
            } else {
                tracing::trace!(year, "year maximum would invert the range, dropped");
            }
        }
    }

    if found.bounds.min.is_none() || found.bounds.max.is_none() {
        for caps in PAIR.captures_iter(lower) {
            let (Some(first), Some(second), Some(whole)) =
                (year_at(&caps, 1), year_at(&caps, 2), caps.get(0))
            else {
                continue;
            };
            if first > second {
                tracing::trace!(first, second, "descending year pair ignored");
                continue;
            }
            let took_min = found.bounds.min.is_none() && found.bounds.offer_min(first);
            let took_max = found.bounds.max.is_none() && found.bounds.offer_max(second);
            if took_min || took_max {
                found.claim(whole.range());
            }
            break;
        }
    }

    if found.bounds.is_empty() {
        for caps in BARE.captures_iter(lower) {
            let (Some(year), Some(whole)) = (year_at(&caps, 1), caps.get(0)) else {
                continue;
            };
            if !is_standalone_year(lower, whole.start(), whole.end()) {
                tracing::trace!(year, "4-digit token reads as an amount, skipped");
                continue;
            }
            found.bounds.min = Some(year);
            found.bounds.max = Some(year);
            found.claim(whole.range());
            break;
        }
    }

    if !found.bounds.is_empty() {
        tracing::debug!(min = ?found.bounds.min, max = ?found.bounds.max, "year range");
    }
    found
}

fn is_standalone_year(lower: &str, start: usize, end: usize) -> bool {
    if preceded_by_currency(lower, start) || followed_by_distance_unit(lower, end) {
        return false;
    }
    let previous = lower[..start].split_whitespace().next_back();
    !previous.is_some_and(|word| AMOUNT_LEADS.contains(&word))
}
