use tracing::{debug, info};

use crate::agents::{Driver, Rider};
use crate::geo::Location;

use super::algorithm::MatchingAlgorithm;
use super::types::{Match, MatchOutcome};

/// Pickup distance between a driver location and a rider pickup.
pub type DistanceFn = fn(Location, Location) -> f64;

fn haversine_miles(driver: Location, pickup: Location) -> f64 {
    driver.distance_miles(pickup)
}

/// Greedy nearest-driver matching.
///
/// Riders are visited in input order. Each one takes the nearest driver whose
/// remaining seats cover its passenger count, and that driver's remaining
/// seats drop accordingly. Earlier riders therefore get first pick, and an
/// assignment is never revisited even when a later rider would have been
/// better served. Ties go to the driver that appears first.
///
/// # Performance
///
/// O(drivers × riders) with no spatial index; intended for tens of entities.
#[derive(Debug, Clone, Copy)]
pub struct GreedyNearestMatching {
    distance: DistanceFn,
}

impl GreedyNearestMatching {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom pickup distance instead of haversine miles.
    pub fn with_distance(distance: DistanceFn) -> Self {
        Self { distance }
    }

    /// Index and distance of the nearest driver with enough remaining seats.
    fn nearest_eligible(
        &self,
        rider: &Rider,
        drivers: &[Driver],
        remaining: &[u32],
    ) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        let mut best_distance = f64::INFINITY;

        for (index, driver) in drivers.iter().enumerate() {
            if remaining[index] < rider.passengers {
                continue;
            }
            let distance = (self.distance)(driver.location, rider.pickup);
            if distance < best_distance {
                best_distance = distance;
                best = Some((index, distance));
            }
        }

        best
    }
}

impl Default for GreedyNearestMatching {
    fn default() -> Self {
        Self {
            distance: haversine_miles,
        }
    }
}

impl MatchingAlgorithm for GreedyNearestMatching {
    fn run(&self, drivers: &[Driver], riders: &[Rider]) -> MatchOutcome {
        let mut remaining: Vec<u32> = drivers.iter().map(|driver| driver.capacity).collect();
        let mut matches = Vec::with_capacity(riders.len());
        let mut unmatched = Vec::new();

        for rider in riders {
            match self.nearest_eligible(rider, drivers, &remaining) {
                Some((index, distance_miles)) => {
                    let driver = &drivers[index];
                    remaining[index] -= rider.passengers;
                    debug!(
                        driver_id = %driver.id,
                        rider_id = %rider.id,
                        distance_miles,
                        seats_left = remaining[index],
                        "rider matched"
                    );
                    matches.push(Match {
                        driver_id: driver.id,
                        rider_id: rider.id,
                        distance_miles,
                        passengers: rider.passengers,
                    });
                }
                None => {
                    debug!(
                        rider_id = %rider.id,
                        passengers = rider.passengers,
                        "no driver with enough seats"
                    );
                    unmatched.push(rider.id);
                }
            }
        }

        info!(
            drivers = drivers.len(),
            riders = riders.len(),
            matched = matches.len(),
            unmatched = unmatched.len(),
            "matching run complete"
        );

        MatchOutcome {
            matches,
            remaining_capacity: drivers
                .iter()
                .zip(remaining)
                .map(|(driver, seats)| (driver.id, seats))
                .collect(),
            unmatched,
        }
    }
}
