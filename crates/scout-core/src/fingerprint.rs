//! Stable fingerprint of a filter record.

use sha2::{Digest, Sha256};
use std::fmt;

use crate::filters::SearchFilters;

/// SHA-256 of a filter record's canonical query string.
///
/// Identical phrases interpret to identical filters, so this doubles as a
/// cache key.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FilterFingerprint([u8; 32]);

impl FilterFingerprint {
    /// Compute the fingerprint of the given filters.
    pub fn of(filters: &SearchFilters) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(filters.to_query_string().as_bytes());
        let result = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&result);
        Self(bytes)
    }

    /// Convert to a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for FilterFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FilterFingerprint({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for FilterFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
