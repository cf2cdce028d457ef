//! Scout Core Library
//!
//! Turns a free-text search phrase such as
//! "Find me Lexus CT200h after 2012 with 100k or below mileage near Auckland"
//! into structured filters (make, model, year/price/odometer ranges,
//! location, color, condition) plus the residual keyword query.
//!
//! Interpretation is pure and deterministic: no I/O, no shared state, and
//! the same phrase always yields the same filters.
//!
//! ```
//! use scout_core::interpret;
//!
//! let parsed = interpret("Cars under $20k");
//! assert_eq!(parsed.filters.price_max, Some(20_000));
//! assert_eq!(parsed.filters.odometer_max, None);
//! ```

pub mod cleaner;
pub mod error;
pub mod extract;
pub mod filters;
pub mod fingerprint;
pub mod gazetteer;
pub mod projection;
pub mod query;

#[cfg(test)]
pub mod testutils;

pub use error::{Error, Result};
pub use filters::{Category, Condition, ParsedQuery, SearchFilters, MATCH_ALL};
pub use fingerprint::FilterFingerprint;
pub use query::{interpret, summarize, SUMMARY_SEPARATOR};
