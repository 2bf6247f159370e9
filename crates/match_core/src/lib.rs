//! Greedy nearest-driver ride matching.
//!
//! The [`matching`] module holds the core assignment pass; everything else
//! feeds it (roster, sampling, data files) or renders its result (report).

pub mod agents;
pub mod data_files;
pub mod error;
pub mod geo;
pub mod matching;
pub mod report;
pub mod roster;
pub mod sampling;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use agents::{Driver, DriverId, NewDriver, NewRider, Rider, RiderId};
pub use error::{LoadError, RosterError};
pub use geo::{distance_miles, Location, EARTH_RADIUS_MILES};
pub use matching::{match_riders, GreedyNearestMatching, Match, MatchOutcome, MatchingAlgorithm};
