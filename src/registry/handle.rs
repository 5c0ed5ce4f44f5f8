use std::fmt;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::{
    core::store::{MatchStore, RegistryConfig, RegistryError},
    country::{CountryResolver, IsoCountryTable},
    fixture::{Match, MatchDraft},
    types::{MatchId, StartTime},
};

/// Thread-safe scoreboard shared by any number of readers and writers.
///
/// A single read/write lock covers the whole [`MatchStore`], so every
/// writer moves the by-id and leaderboard indexes from one consistent
/// state to the next and readers only ever observe completed writes.
/// Share it across threads with `Arc<MatchRegistry>`.
pub struct MatchRegistry {
    store: RwLock<MatchStore>,
    countries: Box<dyn CountryResolver>,
}

impl fmt::Debug for MatchRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchRegistry")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl MatchRegistry {
    /// Empty registry resolving codes through `countries`.
    pub fn new(countries: impl CountryResolver) -> Self {
        Self::with_config(countries, RegistryConfig::default())
    }

    /// Empty registry resolving codes through `countries`, numbered and
    /// sized from `config`.
    pub fn with_config(countries: impl CountryResolver, config: RegistryConfig) -> Self {
        Self {
            store: RwLock::new(MatchStore::with_config(&config)),
            countries: Box::new(countries),
        }
    }

    /// Empty registry backed by [`IsoCountryTable`].
    pub fn with_iso_countries() -> Self {
        Self::new(IsoCountryTable)
    }

    /// Starts a 0-0 match and returns its id.
    ///
    /// Codes are resolved home first, then away. Participant checks run in
    /// the same order, so when both sides are busy the home country is the
    /// one reported in [`RegistryError::TeamAlreadyPlaying`].
    pub fn start_match(
        &self,
        home_code: &str,
        away_code: &str,
        start_time: StartTime,
    ) -> Result<MatchId, RegistryError> {
        let mut store = self.store.write();
        let res = self
            .resolve_draft(home_code, away_code, start_time)
            .and_then(|draft| store.start(draft));
        if let Err(err) = &res {
            debug!(home_code, away_code, error = %err, "start rejected");
        }
        res
    }

    /// Sets both scores of a running match to the given absolute values.
    ///
    /// Negative scores are rejected before the id is looked up. Finished
    /// matches are reported as [`RegistryError::MatchNotFound`].
    pub fn update_score(
        &self,
        id: MatchId,
        home_score: i32,
        away_score: i32,
    ) -> Result<(), RegistryError> {
        let res = self.store.write().update_score(id, home_score, away_score);
        if let Err(err) = &res {
            debug!(match_id = id, home_score, away_score, error = %err, "score update rejected");
        }
        res
    }

    /// Finishes a running match; its countries may start new matches.
    ///
    /// Finishing twice reports [`RegistryError::MatchNotFound`] the second
    /// time.
    pub fn finish_match(&self, id: MatchId) -> Result<(), RegistryError> {
        let res = self.store.write().finish(id);
        if let Err(err) = &res {
            debug!(match_id = id, error = %err, "finish rejected");
        }
        res
    }

    /// Snapshot of any known match, finished ones included.
    pub fn get_match(&self, id: MatchId) -> Result<Match, RegistryError> {
        trace!(match_id = id, "get match");
        self.store
            .read()
            .get_cloned(id)
            .ok_or(RegistryError::MatchNotFound(id))
    }

    /// Running matches, highest total score first, then most recent
    /// kick-off, then lowest id.
    ///
    /// The returned vector is an independent copy.
    pub fn list_running_sorted(&self) -> Vec<Match> {
        let running = self.store.read().running_cloned();
        trace!(running = running.len(), "list running");
        running
    }

    /// Leaderboard lines such as `"Uruguay 6 - Italy 6"`, in
    /// [`Self::list_running_sorted`] order.
    pub fn summary(&self) -> Vec<String> {
        self.store.read().running().map(ToString::to_string).collect()
    }

    /// Number of running matches.
    pub fn running_count(&self) -> usize {
        self.store.read().running_len()
    }

    /// Number of matches ever started.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// True until the first match is started.
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// True when the country display name is on either side of a running
    /// match.
    pub fn is_playing(&self, country: &str) -> bool {
        self.store.read().is_playing(country)
    }

    fn resolve_draft(
        &self,
        home_code: &str,
        away_code: &str,
        start_time: StartTime,
    ) -> Result<MatchDraft, RegistryError> {
        let home_country = self.countries.resolve(home_code)?;
        let away_country = self.countries.resolve(away_code)?;
        Ok(MatchDraft {
            home_country,
            away_country,
            start_time,
        })
    }
}
