use std::hash::Hash;

use hashbrown::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    core::indices::{ParticipantIndex, SortedIndex},
    fixture::{Match, MatchDraft, Score},
    types::{Goals, MatchId},
};

/// Failures reported by registry operations. None of them mutate state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The country code could not be resolved to a country.
    #[error("country code {0} is not supported")]
    CountryNotSupported(String),
    /// The country already plays in a running match.
    #[error("team {0} is playing in another match")]
    TeamAlreadyPlaying(String),
    /// At least one of the supplied scores is negative.
    #[error("scores must not be negative (home {home}, away {away})")]
    ScoreNotPositive {
        /// Supplied home score.
        home: i32,
        /// Supplied away score.
        away: i32,
    },
    /// No running match exists under this id.
    #[error("match {0} not found")]
    MatchNotFound(MatchId),
    /// The id counter reached [`MatchId::MAX`]; no further match can start.
    #[error("match ids exhausted")]
    IdsExhausted,
}

/// Sizing and numbering knobs for a fresh store.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Id handed to the first started match. [`MatchId::MAX`] itself is
    /// never issued.
    pub first_match_id: MatchId,
    /// Number of matches the indexes are pre-sized for.
    pub expected_matches: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            first_match_id: 1,
            expected_matches: 0,
        }
    }
}

/// Single-threaded match state: the by-id map, the leaderboard index and
/// the participant index, always updated together.
///
/// Every method validates before touching any index, so a returned error
/// leaves the store exactly as it was.
#[derive(Debug)]
pub struct MatchStore {
    by_id: HashMap<MatchId, Match>,
    by_sort_key: SortedIndex,
    by_participant: ParticipantIndex,
    next_match_id: MatchId,
}

impl MatchStore {
    /// Empty store with [`RegistryConfig::default`].
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Empty store numbered and sized from `config`.
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            by_id: presized(config.expected_matches),
            by_sort_key: SortedIndex::new(),
            by_participant: presized(config.expected_matches.saturating_mul(2)),
            next_match_id: config.first_match_id,
        }
    }

    /// Starts a 0-0 match between the two drafted countries.
    pub fn start(&mut self, draft: MatchDraft) -> Result<MatchId, RegistryError> {
        if self.is_playing(&draft.home_country) {
            return Err(RegistryError::TeamAlreadyPlaying(draft.home_country));
        }
        if draft.away_country == draft.home_country || self.is_playing(&draft.away_country) {
            return Err(RegistryError::TeamAlreadyPlaying(draft.away_country));
        }

        let id = self.next_match_id;
        self.next_match_id = id.checked_add(1).ok_or(RegistryError::IdsExhausted)?;

        let m = Match {
            id,
            home: Score::zero(draft.home_country),
            away: Score::zero(draft.away_country),
            start_time: draft.start_time,
            finished: false,
        };

        debug!(
            match_id = id,
            home = %m.home.country,
            away = %m.away.country,
            start_time = %m.start_time,
            "match started"
        );
        self.by_participant.insert(m.home.country.clone(), id);
        self.by_participant.insert(m.away.country.clone(), id);
        self.by_sort_key.insert(m.sort_key(), m.clone());
        self.by_id.insert(id, m);
        Ok(id)
    }

    /// Replaces the scores of a running match with absolute values.
    pub fn update_score(&mut self, id: MatchId, home: i32, away: i32) -> Result<(), RegistryError> {
        let (home_goals, away_goals) = checked_goals(home, away)?;
        let current = self.running_match(id)?;
        let old_key = current.sort_key();
        let replacement = current.with_scores(home_goals, away_goals);

        self.by_sort_key.remove(&old_key);
        self.by_sort_key.insert(replacement.sort_key(), replacement.clone());
        self.by_id.insert(id, replacement);

        debug!(match_id = id, home, away, "score updated");
        Ok(())
    }

    /// Moves a running match to its terminal finished state.
    pub fn finish(&mut self, id: MatchId) -> Result<(), RegistryError> {
        let current = self.running_match(id)?;
        let key = current.sort_key();
        let finished = current.finished_copy();

        self.by_sort_key.remove(&key);
        self.by_participant.remove(&finished.home.country);
        self.by_participant.remove(&finished.away.country);
        self.by_id.insert(id, finished);

        debug!(match_id = id, "match finished");
        Ok(())
    }

    /// Any known match, finished or not.
    pub fn get(&self, id: MatchId) -> Option<&Match> {
        self.by_id.get(&id)
    }

    /// Owned copy of [`MatchStore::get`].
    pub fn get_cloned(&self, id: MatchId) -> Option<Match> {
        self.get(id).cloned()
    }

    /// Running matches in leaderboard order.
    pub fn running(&self) -> impl Iterator<Item = &Match> {
        self.by_sort_key.values()
    }

    /// Owned copy of [`MatchStore::running`].
    pub fn running_cloned(&self) -> Vec<Match> {
        self.running().cloned().collect()
    }

    /// Number of running matches.
    pub fn running_len(&self) -> usize {
        self.by_sort_key.len()
    }

    /// Number of matches ever started, finished ones included.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True until the first match is started.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// True when `country` is home or away in a running match.
    pub fn is_playing(&self, country: &str) -> bool {
        self.by_participant.contains_key(country)
    }

    /// Every known id, ascending.
    pub fn ids(&self) -> Vec<MatchId> {
        let mut ids: Vec<MatchId> = self.by_id.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn running_match(&self, id: MatchId) -> Result<&Match, RegistryError> {
        self.by_id
            .get(&id)
            .filter(|m| m.is_running())
            .ok_or(RegistryError::MatchNotFound(id))
    }
}

impl Default for MatchStore {
    fn default() -> Self {
        Self::new()
    }
}

/// `expected_matches` is a hint: a reservation the allocator refuses
/// leaves the map empty instead of aborting.
fn presized<K: Eq + Hash, V>(capacity: usize) -> HashMap<K, V> {
    let mut map = HashMap::new();
    if map.try_reserve(capacity).is_err() {
        debug!(capacity, "index pre-sizing refused, starting empty");
    }
    map
}

fn checked_goals(home: i32, away: i32) -> Result<(Goals, Goals), RegistryError> {
    match (Goals::try_from(home), Goals::try_from(away)) {
        (Ok(h), Ok(a)) => Ok((h, a)),
        _ => Err(RegistryError::ScoreNotPositive { home, away }),
    }
}
