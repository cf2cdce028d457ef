//! Numeric helpers shared by the year, price and odometer stages.

use std::ops::Range;

/// Byte span in the lowercased query.
pub type Span = Range<usize>;

/// Regex fragment for a numeric literal: digits with optional thousands
/// commas and an optional decimal part.
pub(crate) const NUMBER: &str = r"(\d[\d,]*(?:\.\d+)?)";

/// Regex fragment for distance units and usage keywords.
pub(crate) const DISTANCE_UNIT: &str = r"(?:kms|km|kilometers|kilometres|mileage|odometer)";

/// Inclusive lower/upper bound pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T: Copy + PartialOrd> Bounds<T> {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Set the minimum if unset and not above the current maximum.
    pub fn offer_min(&mut self, value: T) -> bool {
        if self.min.is_some() || self.max.is_some_and(|max| value > max) {
            return false;
        }
        self.min = Some(value);
        true
    }

    /// Set the maximum if unset and not below the current minimum.
    pub fn offer_max(&mut self, value: T) -> bool {
        if self.max.is_some() || self.min.is_some_and(|min| value < min) {
            return false;
        }
        self.max = Some(value);
        true
    }
}

/// Output of a numeric stage: the bounds it found and the spans it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMatch<T> {
    pub bounds: Bounds<T>,
    pub spans: Vec<Span>,
}

impl<T> Default for RangeMatch<T> {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            spans: Vec::new(),
        }
    }
}

impl<T> RangeMatch<T> {
    pub(crate) fn claim(&mut self, span: Span) {
        self.spans.push(span);
    }
}

/// Whether `span` overlaps any claimed span.
pub fn is_claimed(claimed: &[Span], span: &Span) -> bool {
    claimed
        .iter()
        .any(|c| c.start < span.end && span.start < c.end)
}

/// Parse a numeric literal with an optional `k`/`m` magnitude suffix.
///
/// Commas are dropped; decimal compact forms such as `1.5k` are allowed.
pub fn parse_compact(number: &str, suffix: Option<&str>) -> Option<u64> {
    let digits: String = number.chars().filter(|c| *c != ',').collect();
    let value: f64 = digits.parse().ok()?;
    let scale = match suffix {
        Some("k") | Some("K") => 1_000.0,
        Some("m") | Some("M") => 1_000_000.0,
        _ => 1.0,
    };
    let scaled = (value * scale).round();
    if !scaled.is_finite() || scaled < 0.0 || scaled > u64::MAX as f64 {
        return None;
    }
    Some(scaled as u64)
}

/// Whether the text right before `start` ends with a currency symbol.
pub(crate) fn preceded_by_currency(text: &str, start: usize) -> bool {
    text[..start].trim_end().ends_with('$')
}

/// Whether `start` begins a token rather than continuing an alphanumeric one.
pub(crate) fn at_token_start(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !(c.is_alphanumeric() || c == '.' || c == ','))
}

/// Whether the text right after `end` starts with a distance unit word.
pub(crate) fn followed_by_distance_unit(text: &str, end: usize) -> bool {
    let word: String = text[end..]
        .trim_start()
        .chars()
        .take_while(|c| c.is_alphabetic())
        .collect();
    crate::gazetteer::MILEAGE_CONTEXT.contains(&word.as_str())
}
