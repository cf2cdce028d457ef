//! Price range stage.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::numeric::{
    at_token_start, followed_by_distance_unit, is_claimed, parse_compact, RangeMatch, Span,
};

/// Both ends of a bare `A-B` range must exceed this to count as a price.
pub const BARE_RANGE_FLOOR: u64 = 1_000;

/// A monetary amount: optional `$`, number, optional `k`/`m` suffix.
const AMOUNT: &str = r"(?:\$\s?)?(\d[\d,]*(?:\.\d+)?)([km])?\b";

static UNDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:under|below|less\s+than)\s+{AMOUNT}")).expect("static regex: under")
});

static OVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:over|above|more\s+than)\s+{AMOUNT}")).expect("static regex: over")
});

static BETWEEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\bbetween\s+{AMOUNT}\s+and\s+{AMOUNT}")).expect("static regex: between")
});

static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{AMOUNT}\s*(?:-|to)\s*{AMOUNT}")).expect("static regex: bare range")
});

fn amount_at(caps: &Captures<'_>, group: usize) -> Option<u64> {
    let number = caps.get(group)?.as_str();
    parse_compact(number, caps.get(group + 1).map(|m| m.as_str()))
}

/// First unclaimed match of `pattern`, with its amount.
fn first_open(pattern: &Regex, lower: &str, claimed: &[Span]) -> Option<(u64, Span)> {
    pattern.captures_iter(lower).find_map(|caps| {
        let whole = caps.get(0)?.range();
        if is_claimed(claimed, &whole) {
            tracing::trace!(span = ?whole, "amount already claimed, skipped");
            return None;
        }
        Some((amount_at(&caps, 1)?, whole))
    })
}

/// Find the price bounds in a lowercased query.
///
/// `claimed` holds spans already consumed by the year and odometer stages;
/// expressions overlapping them are never read as prices. `between A and B`
/// keeps written order, while a bare `A-B` range is reordered by magnitude.
pub fn extract_price(lower: &str, claimed: &[Span]) -> RangeMatch<u64> {
    let mut found = RangeMatch::default();

    if let Some((value, span)) = first_open(&UNDER, lower, claimed) {
        found.bounds.offer_max(value);
        found.claim(span);
    }

    if let Some((value, span)) = first_open(&OVER, lower, claimed) {
        if found.bounds.offer_min(value) {
            found.claim(span);
        } else {
            tracing::trace!(value, "price minimum would invert the range, dropped");
        }
    }

    let mut saw_between = false;
    if found.bounds.is_empty() {
        let open = BETWEEN.captures_iter(lower).find(|caps| {
            caps.get(0)
                .is_some_and(|whole| !is_claimed(claimed, &whole.range()))
        });
        if let Some(caps) = open {
            saw_between = true;
            if let (Some(first), Some(second), Some(whole)) =
                (amount_at(&caps, 1), amount_at(&caps, 3), caps.get(0))
            {
                if first <= second {
                    found.bounds.min = Some(first);
                    found.bounds.max = Some(second);
                    found.claim(whole.range());
                } else {
                    tracing::trace!(first, second, "descending between-range ignored");
                }
            }
        }
    }

    if found.bounds.is_empty() && !saw_between {
        for caps in RANGE.captures_iter(lower) {
            let (Some(first), Some(second), Some(whole)) =
                (amount_at(&caps, 1), amount_at(&caps, 3), caps.get(0))
            else {
                continue;
            };
            let span = whole.range();
            if !at_token_start(lower, span.start)
                || is_claimed(claimed, &span)
                || followed_by_distance_unit(lower, span.end)
            {
                continue;
            }
            if first <= BARE_RANGE_FLOOR || second <= BARE_RANGE_FLOOR {
                tracing::trace!(first, second, "bare range below the price floor");
                continue;
            }
            found.bounds.min = Some(first.min(second));
            found.bounds.max = Some(first.max(second));
            found.claim(span);
            break;
        }
    }

    if !found.bounds.is_empty() {
        tracing::debug!(min = ?found.bounds.min, max = ?found.bounds.max, "price range");
    }
    found
}
