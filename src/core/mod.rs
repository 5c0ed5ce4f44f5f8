//! In-memory match store and index helpers.

/// Leaderboard sort key and index aliases.
pub mod indices;
/// Authoritative match store keeping every index in step.
pub mod store;
