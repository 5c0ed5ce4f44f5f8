//! Concurrent registry handle over the match store.

/// Lock-guarded registry and its public operations.
pub mod handle;

pub use handle::MatchRegistry;
