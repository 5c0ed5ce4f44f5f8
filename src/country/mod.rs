//! Country-code resolution collaborators.
//!
//! The registry never owns a country table itself; it is handed a
//! [`CountryResolver`] at construction and calls it to turn the codes a
//! caller passes to `start_match` into the display names stored on each
//! [`Score`](crate::fixture::Score).

use hashbrown::HashMap;
use thiserror::Error;

use crate::core::store::RegistryError;

/// Static ISO 3166-1 alpha-3 table.
pub mod iso;

pub use iso::IsoCountryTable;

/// The code has no entry in the resolver's table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported country code {0}")]
pub struct UnsupportedCountry(pub String);

impl From<UnsupportedCountry> for RegistryError {
    fn from(value: UnsupportedCountry) -> Self {
        Self::CountryNotSupported(value.0)
    }
}

/// Maps a country code to its display name.
///
/// Implementations must be pure and cheap: the registry calls `resolve`
/// while holding its write lock.
pub trait CountryResolver: Send + Sync + 'static {
    /// Display name for `code`, or [`UnsupportedCountry`] carrying `code`
    /// exactly as supplied.
    fn resolve(&self, code: &str) -> Result<String, UnsupportedCountry>;
}

/// Caller-supplied code table with exact-match lookup.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    names: HashMap<String, String>,
}

impl CountryTable {
    /// Adds or replaces one entry.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.names.insert(code.into(), name.into());
    }

    /// Number of codes in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the table has no codes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<C: Into<String>, N: Into<String>> FromIterator<(C, N)> for CountryTable {
    fn from_iter<I: IntoIterator<Item = (C, N)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }
}

impl CountryResolver for CountryTable {
    fn resolve(&self, code: &str) -> Result<String, UnsupportedCountry> {
        self.names
            .get(code)
            .cloned()
            .ok_or_else(|| UnsupportedCountry(code.to_string()))
    }
}
