use crate::agents::{Driver, Rider};

use super::types::{Match, MatchOutcome};

/// Trait for algorithms that pair riders with drivers.
///
/// Implementations must treat both slices as read-only: any per-run capacity
/// bookkeeping lives inside the call, so repeated calls over the same input
/// give the same outcome.
pub trait MatchingAlgorithm: Send + Sync {
    /// Run one full matching pass.
    fn run(&self, drivers: &[Driver], riders: &[Rider]) -> MatchOutcome;

    /// Run a pass and keep only the matches.
    fn find_matches(&self, drivers: &[Driver], riders: &[Rider]) -> Vec<Match> {
        self.run(drivers, riders).matches
    }
}
