//! Concurrent in-memory scoreboard of running matches.
//!
//! Matches are indexed by id and by a leaderboard key (total score
//! descending, most recent kick-off first, lowest id first). Both indexes
//! live behind one read/write lock so [`MatchRegistry::list_running_sorted`]
//! always returns a consistent, pre-sorted snapshot.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use scoreboard::{MatchRegistry, RegistryError};
//!
//! let kickoff = NaiveDate::from_ymd_opt(2022, 7, 15)
//!     .and_then(|d| d.and_hms_opt(19, 30, 0))
//!     .expect("valid date");
//!
//! let registry = MatchRegistry::with_iso_countries();
//! let mex_can = registry.start_match("MEX", "CAN", kickoff).expect("start");
//! let esp_fra = registry.start_match("ESP", "FRA", kickoff).expect("start");
//! registry.update_score(mex_can, 1, 7).expect("update");
//!
//! let ids: Vec<_> = registry.list_running_sorted().iter().map(|m| m.id).collect();
//! assert_eq!(ids, vec![mex_can, esp_fra]);
//!
//! assert_eq!(
//!     registry.start_match("MEX", "DEU", kickoff),
//!     Err(RegistryError::TeamAlreadyPlaying("Mexico".to_string()))
//! );
//! ```
#![deny(missing_docs)]

/// Match store and leaderboard index helpers.
pub mod core;
/// Country-code resolvers.
pub mod country;
/// Match, score and start request types.
pub mod fixture;
/// Thread-safe registry handle.
pub mod registry;
/// Shared primitive types.
pub mod types;

pub use crate::{
    core::store::{MatchStore, RegistryConfig, RegistryError},
    country::{CountryResolver, CountryTable, IsoCountryTable, UnsupportedCountry},
    fixture::{Match, Score},
    registry::MatchRegistry,
    types::MatchId,
};
