//! Residual keyword query.
//!
//! The only stage that edits text: it strips recognized phrases from the
//! original-cased input, leaving the words the backend should search for.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::extract::numeric::{at_token_start, parse_compact, DISTANCE_UNIT, NUMBER};
use crate::extract::BARE_RANGE_FLOOR;
use crate::filters::MATCH_ALL;
use crate::gazetteer::{is_electronics_brand, CONDITIONS, FILLER_WORDS, LOCATIONS, MAKES};

/// Case-insensitive alternation of phrases, longest first so the longer of
/// two overlapping phrases is removed whole.
fn any_phrase<'a>(phrases: impl IntoIterator<Item = &'a str>) -> Regex {
    let mut phrases: Vec<&str> = phrases.into_iter().collect();
    phrases.sort_by_key(|p| std::cmp::Reverse(p.len()));
    let alternation = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("static regex: phrase list")
}

static PRICE_EXPRESSIONS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let amount = format!(r"(?:\$\s?)?{NUMBER}[km]?");
    [
        format!(
            r"(?i)\b(?:under|below|less\s+than|over|above|more\s+than)\s+{amount}(?:\s*{DISTANCE_UNIT})?\b"
        ),
        format!(r"(?i)\bbetween\s+{amount}\s+and\s+{amount}\b"),
        format!(r"(?i)\${NUMBER}[km]?\s*(?:-|to)\s*{amount}\b"),
        format!(r"(?i)\b{NUMBER}[km]\s*(?:-|to)\s*{amount}\b"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("static regex: price expression"))
    .collect()
});

/// Unadorned `A-B` / `A to B`; the optional unit marks a distance instead.
static BARE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b{NUMBER}\s*(?:-|to)\s*{NUMBER}\b(\s*{DISTANCE_UNIT}\b)?"
    ))
    .expect("static regex: bare range")
});

static YEAR_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:19|20)\d{2}$").expect("static regex: year-like"));

static PHRASE_GROUPS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let conditions = CONDITIONS.iter().flat_map(|(_, triggers)| triggers.iter().copied());
    let makes = MAKES.iter().copied().filter(|make| !is_electronics_brand(make));
    vec![
        any_phrase(LOCATIONS.iter().copied()),
        any_phrase(conditions),
        any_phrase(makes),
        any_phrase(FILLER_WORDS.iter().copied()),
    ]
});

/// Remove price expressions, places, condition phrases, vehicle makes and
/// filler words from `original`, collapsing whitespace.
///
/// Falls back to the untouched input when nothing is left, and to
/// [`MATCH_ALL`] when the input itself is blank.
pub fn clean_query(original: &str) -> String {
    let mut text = original.to_string();
    for pattern in PRICE_EXPRESSIONS.iter() {
        if pattern.is_match(&text) {
            text = pattern.replace_all(&text, " ").into_owned();
        }
    }
    text = strip_bare_ranges(&text);
    for pattern in PHRASE_GROUPS.iter() {
        if pattern.is_match(&text) {
            text = pattern.replace_all(&text, " ").into_owned();
        }
    }

    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !cleaned.is_empty() {
        cleaned
    } else if !original.trim().is_empty() {
        original.to_string()
    } else {
        MATCH_ALL.to_string()
    }
}

/// Remove bare ranges the price stage would read as a price: both ends above
/// the floor, no distance unit, and neither end a plausible year.
fn strip_bare_ranges(text: &str) -> String {
    BARE_RANGE
        .replace_all(text, |caps: &Captures<'_>| {
            if is_bare_price_range(text, caps) {
                " ".to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn is_bare_price_range(text: &str, caps: &Captures<'_>) -> bool {
    let (Some(whole), Some(first), Some(second)) = (caps.get(0), caps.get(1), caps.get(2)) else {
        return false;
    };
    if caps.get(3).is_some() || !at_token_start(text, whole.start()) {
        return false;
    }
    [first.as_str(), second.as_str()].iter().all(|number| {
        !YEAR_LIKE.is_match(number)
            && parse_compact(number, None).is_some_and(|value| value > BARE_RANGE_FLOOR)
    })
}
