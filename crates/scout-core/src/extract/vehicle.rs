//! Make and model stages.

use std::sync::LazyLock;

use regex::Regex;

use super::numeric::Span;
use super::{capitalize, whole_word};
use crate::gazetteer::{MAKES, MODEL_STOP_WORDS};

/// Longest model name, in tokens.
pub const MAX_MODEL_TOKENS: usize = 2;

static MAKE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| MAKES.iter().map(|make| (*make, whole_word(make))).collect());

/// A manufacturer found in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeMatch {
    /// Display form: first letter upper-case, the rest lower-case
    pub name: String,
    /// Where the make sits in the lowercased query
    pub span: Span,
}

/// Find the first gazetteer make present in the query.
///
/// Gazetteer order decides between several makes, not position in the text.
pub fn extract_make(lower: &str) -> Option<MakeMatch> {
    MAKE_PATTERNS.iter().find_map(|(make, pattern)| {
        let found = pattern.find(lower)?;
        tracing::debug!(make, "make matched");
        Some(MakeMatch {
            name: capitalize(make),
            span: found.range(),
        })
    })
}

/// Collect the model tokens that follow the make.
///
/// Stops at a stop word, a 4-digit token, a `$` amount, or after
/// [`MAX_MODEL_TOKENS`] tokens.
pub fn extract_model(lower: &str, make: Option<&MakeMatch>) -> Option<String> {
    let make = make?;
    let mut tokens = Vec::new();

    for raw in lower[make.span.end..].split_whitespace() {
        if tokens.len() == MAX_MODEL_TOKENS || raw.starts_with('$') {
            break;
        }
        let token = raw.trim_end_matches(|c: char| c.is_ascii_punctuation());
        if token.is_empty() {
            continue;
        }
        if MODEL_STOP_WORDS.contains(&token) || is_year_token(token) {
            break;
        }
        tokens.push(token);
    }

    if tokens.is_empty() {
        return None;
    }
    let model = tokens.join(" ");
    tracing::debug!(model = %model, "model matched");
    Some(model)
}

fn is_year_token(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit())
}
