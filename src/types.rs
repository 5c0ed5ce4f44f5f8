//! Shared primitive IDs and score aliases.

use chrono::NaiveDateTime;

/// Monotonic match identifier.
pub type MatchId = u64;
/// Goals scored by one side of a match.
pub type Goals = u32;
/// Combined goals of both sides, wide enough for any pair of [`Goals`].
pub type TotalGoals = u64;
/// Local kick-off time of a match.
pub type StartTime = NaiveDateTime;
