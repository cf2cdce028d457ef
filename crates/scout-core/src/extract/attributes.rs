//! Color, condition and category stages.

use std::sync::LazyLock;

use regex::Regex;

use super::{capitalize, whole_word};
use crate::filters::{Category, Condition};
use crate::gazetteer::{CATEGORY_KEYWORDS, COLORS, CONDITIONS};

static COLOR_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| COLORS.iter().map(|color| (*color, whole_word(color))).collect());

static CATEGORY_PATTERNS: LazyLock<Vec<(Category, Vec<Regex>)>> = LazyLock::new(|| {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, words)| (*category, words.iter().map(|w| whole_word(w)).collect()))
        .collect()
});

/// First gazetteer color in the query, capitalized.
pub fn extract_color(lower: &str) -> Option<String> {
    COLOR_PATTERNS.iter().find_map(|(color, pattern)| {
        pattern.is_match(lower).then(|| {
            tracing::debug!(color, "color matched");
            capitalize(color)
        })
    })
}

/// Map condition phrases to a canonical label.
///
/// Labels are tried in table order and the first one with any trigger
/// contained in the query wins. Triggers match as plain substrings, so
/// "classical" reads as classic and "renewed" as new.
pub fn extract_condition(lower: &str) -> Option<Condition> {
    let label = CONDITIONS.iter().find_map(|(label, triggers)| {
        triggers
            .iter()
            .any(|trigger| lower.contains(*trigger))
            .then_some(*label)
    })?;
    tracing::debug!(condition = label.as_str(), "condition matched");
    Some(label)
}

/// Guess a listing category from keywords.
///
/// Not called by the interpreter: category filters bias cross-category
/// semantic search, so `SearchFilters::category` stays unset.
pub fn detect_category(lower: &str) -> Option<Category> {
    CATEGORY_PATTERNS
        .iter()
        .find_map(|(category, words)| words.iter().any(|w| w.is_match(lower)).then_some(*category))
}
