//! Session roster: the drivers, riders and latest matches a user is working with.
//!
//! The roster validates input before anything reaches the matcher, hands out
//! identifiers, and refuses to run matching on an empty side.

use std::collections::HashSet;

use tracing::info;

use crate::agents::{Driver, DriverId, NewDriver, NewRider, Rider, RiderId};
use crate::error::RosterError;
use crate::matching::{GreedyNearestMatching, Match, MatchingAlgorithm};
use crate::sampling::{sample, SampleParams};

/// Driver, rider and match counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    pub drivers: usize,
    pub riders: usize,
    pub matches: usize,
}

pub struct Roster {
    drivers: Vec<Driver>,
    riders: Vec<Rider>,
    matches: Vec<Match>,
    next_driver_id: u32,
    next_rider_id: u32,
    algorithm: Box<dyn MatchingAlgorithm>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::with_algorithm(Box::new(GreedyNearestMatching::default()))
    }
}

impl std::fmt::Debug for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roster")
            .field("drivers", &self.drivers)
            .field("riders", &self.riders)
            .field("matches", &self.matches)
            .finish_non_exhaustive()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        Self {
            drivers: Vec::new(),
            riders: Vec::new(),
            matches: Vec::new(),
            next_driver_id: 1,
            next_rider_id: 1,
            algorithm,
        }
    }

    /// Build a roster from records that already carry identifiers.
    ///
    /// Identifiers must be unique per side. Newly added entries continue
    /// after the largest identifier seen.
    pub fn from_records(drivers: Vec<Driver>, riders: Vec<Rider>) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        roster.replace(drivers, riders)?;
        Ok(roster)
    }

    fn replace(&mut self, drivers: Vec<Driver>, riders: Vec<Rider>) -> Result<(), RosterError> {
        let mut seen = HashSet::new();
        for driver in &drivers {
            validate_driver(driver)?;
            if !seen.insert(driver.id) {
                return Err(RosterError::DuplicateDriver(driver.id));
            }
        }
        let mut seen = HashSet::new();
        for rider in &riders {
            validate_rider(rider)?;
            if !seen.insert(rider.id) {
                return Err(RosterError::DuplicateRider(rider.id));
            }
        }

        self.install(drivers, riders);
        Ok(())
    }

    /// Swap in already-checked records and clear stale matches.
    fn install(&mut self, drivers: Vec<Driver>, riders: Vec<Rider>) {
        self.next_driver_id = drivers.iter().map(|d| d.id.0).max().unwrap_or(0) + 1;
        self.next_rider_id = riders.iter().map(|r| r.id.0).max().unwrap_or(0) + 1;
        self.drivers = drivers;
        self.riders = riders;
        self.matches.clear();
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn riders(&self) -> &[Rider] {
        &self.riders
    }

    /// Matches from the latest run, empty until [`Roster::run_matching`] succeeds.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    pub fn rider(&self, id: RiderId) -> Option<&Rider> {
        self.riders.iter().find(|r| r.id == id)
    }

    pub fn stats(&self) -> RosterStats {
        RosterStats {
            drivers: self.drivers.len(),
            riders: self.riders.len(),
            matches: self.matches.len(),
        }
    }

    pub fn add_driver(&mut self, input: NewDriver) -> Result<DriverId, RosterError> {
        let driver = Driver {
            id: DriverId(self.next_driver_id),
            name: input.name,
            location: input.location,
            capacity: input.capacity,
        };
        validate_driver(&driver)?;

        self.next_driver_id += 1;
        let id = driver.id;
        self.drivers.push(driver);
        Ok(id)
    }

    pub fn add_rider(&mut self, input: NewRider) -> Result<RiderId, RosterError> {
        let rider = Rider {
            id: RiderId(self.next_rider_id),
            name: input.name,
            pickup: input.pickup,
            dropoff: input.dropoff,
            passengers: input.passengers,
        };
        validate_rider(&rider)?;

        self.next_rider_id += 1;
        let id = rider.id;
        self.riders.push(rider);
        Ok(id)
    }

    /// Returns `false` when no driver has this id.
    pub fn remove_driver(&mut self, id: DriverId) -> bool {
        let before = self.drivers.len();
        self.drivers.retain(|d| d.id != id);
        let removed = self.drivers.len() != before;
        if removed {
            self.matches.clear();
        }
        removed
    }

    /// Returns `false` when no rider has this id.
    pub fn remove_rider(&mut self, id: RiderId) -> bool {
        let before = self.riders.len();
        self.riders.retain(|r| r.id != id);
        let removed = self.riders.len() != before;
        if removed {
            self.matches.clear();
        }
        removed
    }

    /// Drop everything and restart identifiers at 1.
    pub fn reset(&mut self) {
        self.drivers.clear();
        self.riders.clear();
        self.matches.clear();
        self.next_driver_id = 1;
        self.next_rider_id = 1;
        info!("roster reset");
    }

    /// Replace the roster with a random sample from the demo pools.
    pub fn load_sample(&mut self, params: &SampleParams) {
        let (drivers, riders) = sample(params);
        // Pool entries are valid and sampled ids are 1..=n on each side.
        self.install(drivers, riders);
    }

    /// Recompute all matches from scratch.
    pub fn run_matching(&mut self) -> Result<&[Match], RosterError> {
        if self.drivers.is_empty() {
            return Err(RosterError::NoDrivers);
        }
        if self.riders.is_empty() {
            return Err(RosterError::NoRiders);
        }
        self.matches = self.algorithm.find_matches(&self.drivers, &self.riders);
        Ok(&self.matches)
    }

    /// Riders without a match in the latest run, in roster order.
    pub fn unmatched_riders(&self) -> impl Iterator<Item = &Rider> + '_ {
        let matched: HashSet<RiderId> = self.matches.iter().map(|m| m.rider_id).collect();
        self.riders.iter().filter(move |r| !matched.contains(&r.id))
    }
}

/// Name, location and seat checks shared by manual entry and loaded records.
pub fn validate_driver(driver: &Driver) -> Result<(), RosterError> {
    if driver.name.trim().is_empty() {
        return Err(RosterError::EmptyName);
    }
    driver.location.validate()?;
    if driver.capacity == 0 {
        return Err(RosterError::ZeroCapacity);
    }
    Ok(())
}

pub fn validate_rider(rider: &Rider) -> Result<(), RosterError> {
    if rider.name.trim().is_empty() {
        return Err(RosterError::EmptyName);
    }
    rider.pickup.validate()?;
    rider.dropoff.validate()?;
    if rider.passengers == 0 {
        return Err(RosterError::ZeroPassengers);
    }
    Ok(())
}
