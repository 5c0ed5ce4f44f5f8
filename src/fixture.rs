//! Match domain record, score, and start request types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    core::indices::SortKey,
    types::{Goals, MatchId, StartTime, TotalGoals},
};

/// One side of a match: the country playing it and its current goals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Country display name, e.g. `"Mexico"`.
    pub country: String,
    /// Goals scored so far.
    pub value: Goals,
}

impl Score {
    /// A fresh 0 score for `country`.
    pub fn zero(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            value: 0,
        }
    }
}

/// Authoritative, immutable snapshot of a match.
///
/// The registry never mutates a `Match` in place; every state change
/// builds a replacement via [`Match::with_scores`] or
/// [`Match::finished_copy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Stable match identifier.
    pub id: MatchId,
    /// Home side.
    pub home: Score,
    /// Away side.
    pub away: Score,
    /// Kick-off time.
    pub start_time: StartTime,
    /// True once the match has been finished.
    pub finished: bool,
}

impl Match {
    /// Sum of both sides' goals.
    pub fn total_score(&self) -> TotalGoals {
        TotalGoals::from(self.home.value) + TotalGoals::from(self.away.value)
    }

    /// Key under which this match is ordered on the leaderboard.
    pub fn sort_key(&self) -> SortKey {
        SortKey {
            total_score: self.total_score(),
            start_time: self.start_time,
            id: self.id,
        }
    }

    /// Copy carrying new absolute scores; everything else is kept.
    pub fn with_scores(&self, home: Goals, away: Goals) -> Self {
        Self {
            home: Score {
                country: self.home.country.clone(),
                value: home,
            },
            away: Score {
                country: self.away.country.clone(),
                value: away,
            },
            ..self.clone()
        }
    }

    /// Copy marked as finished, scores unchanged.
    pub fn finished_copy(&self) -> Self {
        Self {
            finished: true,
            ..self.clone()
        }
    }

    /// True while the match has not been finished.
    pub fn is_running(&self) -> bool {
        !self.finished
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home.country, self.home.value, self.away.country, self.away.value
        )
    }
}

/// Start payload used to create a new [`Match`] once both country codes
/// have been resolved to display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDraft {
    /// Home country display name.
    pub home_country: String,
    /// Away country display name.
    pub away_country: String,
    /// Kick-off time.
    pub start_time: StartTime,
}
