#![allow(dead_code)]

use match_core::agents::{Driver, Rider};
use match_core::geo::Location;
use match_core::test_helpers::{driver_at, offset_location, rider_at};

/// Degrees of latitude per mile, close enough for fixture placement.
const DEG_PER_MILE: f64 = 1.0 / 69.0;

/// A point `miles` north of the test location.
pub fn miles_north(miles: f64) -> Location {
    offset_location(miles * DEG_PER_MILE, 0.0)
}

pub fn driver_north(id: u32, miles: f64, capacity: u32) -> Driver {
    driver_at(id, miles_north(miles), capacity)
}

pub fn rider_north(id: u32, miles: f64, passengers: u32) -> Rider {
    rider_at(id, miles_north(miles), passengers)
}

/// Two single-seat drivers where D1 is nearer than D2 for both riders.
///
/// D1 at 0 mi, D2 at 5 mi, R1 at 1 mi, R2 at 2 mi (all on one meridian).
pub fn order_sensitive_fixture() -> (Vec<Driver>, Rider, Rider) {
    let drivers = vec![driver_north(1, 0.0, 1), driver_north(2, 5.0, 1)];
    (drivers, rider_north(1, 1.0, 1), rider_north(2, 2.0, 1))
}
