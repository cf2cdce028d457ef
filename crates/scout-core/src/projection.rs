//! Query-string projection of filters.
//!
//! Keys match the JSON field names so a filter record can travel through a
//! URL and be read back unchanged.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::filters::{Condition, SearchFilters, MATCH_ALL};

impl SearchFilters {
    /// One `(key, value)` pair per set field, in a fixed order.
    ///
    /// `category` is never emitted.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key, value));
            }
        };

        push("make", self.make.clone());
        push("model", self.model.clone());
        push("yearMin", self.year_min.map(|v| v.to_string()));
        push("yearMax", self.year_max.map(|v| v.to_string()));
        push("priceMin", self.price_min.map(|v| v.to_string()));
        push("priceMax", self.price_max.map(|v| v.to_string()));
        push("odometerMin", self.odometer_min.map(|v| v.to_string()));
        push("odometerMax", self.odometer_max.map(|v| v.to_string()));
        push("location", self.location.clone());
        push("color", self.color.clone());
        if !self.condition.is_empty() {
            let labels: Vec<&str> = self.condition.iter().map(|c| c.as_str()).collect();
            push("condition", Some(labels.join(",")));
        }
        push("query", Some(self.query.clone()));

        pairs
    }

    /// Percent-encoded `key=value&...` form of [`Self::to_query_pairs`].
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Rebuild filters from query-string pairs.
    ///
    /// Unknown keys and empty values are ignored. A missing query becomes the
    /// match-all query.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filters = SearchFilters::default();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            if value.is_empty() {
                continue;
            }
            match key {
                "make" => filters.make = Some(value.to_string()),
                "model" => filters.model = Some(value.to_lowercase()),
                "yearMin" => filters.year_min = Some(number(key, value)?),
                "yearMax" => filters.year_max = Some(number(key, value)?),
                "priceMin" => filters.price_min = Some(number(key, value)?),
                "priceMax" => filters.price_max = Some(number(key, value)?),
                "odometerMin" => filters.odometer_min = Some(number(key, value)?),
                "odometerMax" => filters.odometer_max = Some(number(key, value)?),
                "location" => filters.location = Some(value.to_string()),
                "color" => filters.color = Some(value.to_string()),
                "condition" => {
                    filters.condition = value
                        .split(',')
                        .filter(|label| !label.trim().is_empty())
                        .map(|label| {
                            Condition::from_label(label).ok_or_else(|| Error::invalid(key, label))
                        })
                        .collect::<Result<_>>()?;
                }
                "query" | "q" => filters.query = value.to_string(),
                other => tracing::trace!(key = other, "ignoring unknown filter parameter"),
            }
        }

        if filters.model.is_some() && filters.make.is_none() {
            return Err(Error::invalid("model", filters.model.as_deref().unwrap_or_default()));
        }
        ordered("year", filters.year_min, filters.year_max)?;
        ordered("price", filters.price_min, filters.price_max)?;
        ordered("odometer", filters.odometer_min, filters.odometer_max)?;
        if filters.query.is_empty() {
            filters.query = MATCH_ALL.to_string();
        }

        Ok(filters)
    }

    /// Parse a raw `key=value&...` string (without the leading `?`).
    pub fn from_query_string(raw: &str) -> Result<Self> {
        let mut pairs = Vec::new();
        for part in raw.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            pairs.push((decode(key)?, decode(value)?));
        }
        Self::from_query_pairs(pairs)
    }
}

fn number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| Error::invalid(key, value))
}

fn ordered<T: PartialOrd>(field: &'static str, min: Option<T>, max: Option<T>) -> Result<()> {
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => Err(Error::InconsistentRange { field }),
        _ => Ok(()),
    }
}

fn decode(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .map_err(|_| Error::invalid("query string", raw))
}
