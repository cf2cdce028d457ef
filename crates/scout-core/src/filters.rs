//! Structured filter types produced by the interpreter.

use serde::{Deserialize, Serialize};

/// Residual query used when the input carries no usable text at all.
pub const MATCH_ALL: &str = "*";

/// Canonical condition of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Fair,
}

impl Condition {
    /// Display label, also used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }

    /// Parse a canonical label, ignoring case and surrounding whitespace.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "new" => Some(Condition::New),
            "like new" => Some(Condition::LikeNew),
            "good" => Some(Condition::Good),
            "fair" => Some(Condition::Fair),
            _ => None,
        }
    }
}

/// Broad listing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vehicles,
    Electronics,
    Furniture,
    Fashion,
    Sports,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vehicles => "vehicles",
            Category::Electronics => "electronics",
            Category::Furniture => "furniture",
            Category::Fashion => "fashion",
            Category::Sports => "sports",
        }
    }
}

/// Filter record handed to the search backend.
///
/// Every field except `query` is optional. Bounds are inclusive and, when
/// both ends of a pair are present, ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Manufacturer, first letter capitalized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    /// Lowercase model tokens; only present alongside `make`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer_max: Option<u64>,
    /// Place name, title-cased per word
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// At most one label today
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub condition: Vec<Condition>,
    /// Never set by the interpreter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Residual keyword query, never empty
    pub query: String,
}

impl SearchFilters {
    /// Whether any structured field (anything besides `query`) is set.
    pub fn has_structured_filters(&self) -> bool {
        self.make.is_some()
            || self.model.is_some()
            || self.year_min.is_some()
            || self.year_max.is_some()
            || self.price_min.is_some()
            || self.price_max.is_some()
            || self.odometer_min.is_some()
            || self.odometer_max.is_some()
            || self.location.is_some()
            || self.color.is_some()
            || !self.condition.is_empty()
            || self.category.is_some()
    }

    /// Fill in a preferred location when the phrase did not name one.
    pub fn with_default_location(mut self, location: &str) -> Self {
        let location = location.trim();
        if self.location.is_none() && !location.is_empty() {
            self.location = Some(location.to_string());
        }
        self
    }
}

/// Result of interpreting one search phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    pub filters: SearchFilters,
    /// "Label: value" summary of the detected filters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreted_as: Option<String>,
    /// The input exactly as received
    pub original_query: String,
}
