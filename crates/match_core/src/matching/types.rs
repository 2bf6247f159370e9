use serde::Serialize;

use crate::agents::{DriverId, RiderId};

/// One rider assigned to one driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match {
    pub driver_id: DriverId,
    pub rider_id: RiderId,
    /// Driver location to rider pickup, in miles.
    pub distance_miles: f64,
    /// Copied from the rider.
    pub passengers: u32,
}

/// Everything a single matching run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchOutcome {
    /// In rider input order.
    pub matches: Vec<Match>,
    /// Seats left per driver after the run, in driver input order.
    pub remaining_capacity: Vec<(DriverId, u32)>,
    /// Riders no driver could take, in rider input order.
    pub unmatched: Vec<RiderId>,
}

impl MatchOutcome {
    pub fn remaining_for(&self, driver_id: DriverId) -> Option<u32> {
        self.remaining_capacity
            .iter()
            .find(|(id, _)| *id == driver_id)
            .map(|(_, seats)| *seats)
    }

    pub fn matches_for_driver(&self, driver_id: DriverId) -> impl Iterator<Item = &Match> + '_ {
        self.matches.iter().filter(move |m| m.driver_id == driver_id)
    }
}
