pub mod algorithm;
pub mod greedy;
pub mod types;

pub use algorithm::MatchingAlgorithm;
pub use greedy::{DistanceFn, GreedyNearestMatching};
pub use types::{Match, MatchOutcome};

use crate::agents::{Driver, Rider};

/// Run the default greedy nearest-driver pass and return only the matches.
///
/// Matches come back in rider input order; unmatched riders are simply absent.
pub fn match_riders(drivers: &[Driver], riders: &[Rider]) -> Vec<Match> {
    GreedyNearestMatching::default().find_matches(drivers, riders)
}
