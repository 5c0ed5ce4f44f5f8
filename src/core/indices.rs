use std::{cmp::Ordering, collections::BTreeMap};

use hashbrown::HashMap;

use crate::{
    fixture::Match,
    types::{MatchId, StartTime, TotalGoals},
};

/// Leaderboard ordering key for a running match.
///
/// Orders by total score descending, then by start time with the most
/// recent kick-off first, then by ascending id so that two distinct
/// matches never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    /// Home plus away goals.
    pub total_score: TotalGoals,
    /// Kick-off time.
    pub start_time: StartTime,
    /// Match identifier, final tie-break.
    pub id: MatchId,
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .total_score
            .cmp(&self.total_score)
            .then_with(|| other.start_time.cmp(&self.start_time))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Running matches in leaderboard order.
pub type SortedIndex = BTreeMap<SortKey, Match>;
/// Country display name to the running match it plays in.
pub type ParticipantIndex = HashMap<String, MatchId>;
