//! Test helpers for common test setup and utilities.
//!
//! Shared fixtures so unit tests, integration tests and benches agree on the
//! same geography (lower Manhattan).

use crate::agents::{Driver, Rider};
use crate::geo::Location;

/// City Hall, New York. Every fixture is placed relative to it.
pub const TEST_LAT: f64 = 40.7128;
pub const TEST_LNG: f64 = -74.0060;

pub fn test_location() -> Location {
    Location::new(TEST_LAT, TEST_LNG)
}

/// A point `north_deg` degrees north and `east_deg` degrees east of the test location.
pub fn offset_location(north_deg: f64, east_deg: f64) -> Location {
    Location::new(TEST_LAT + north_deg, TEST_LNG + east_deg)
}

pub fn driver_at(id: u32, location: Location, capacity: u32) -> Driver {
    Driver::new(
        id,
        format!("driver-{id}"),
        location.lat,
        location.lng,
        capacity,
    )
}

/// Rider whose dropoff equals its pickup; matching ignores dropoff anyway.
pub fn rider_at(id: u32, pickup: Location, passengers: u32) -> Rider {
    Rider::new(id, format!("rider-{id}"), pickup, pickup, passengers)
}

/// `count` drivers on a small grid around the test location, capacities cycling 1..=6.
pub fn grid_drivers(count: usize) -> Vec<Driver> {
    (0..count)
        .map(|i| {
            let location = offset_location((i % 10) as f64 * 0.002, (i / 10) as f64 * 0.002);
            driver_at(i as u32 + 1, location, (i % 6) as u32 + 1)
        })
        .collect()
}

/// `count` riders on a grid offset from [`grid_drivers`], passengers cycling 1..=4.
pub fn grid_riders(count: usize) -> Vec<Rider> {
    (0..count)
        .map(|i| {
            let pickup = offset_location(
                (i % 10) as f64 * 0.002 + 0.001,
                (i / 10) as f64 * 0.002 + 0.001,
            );
            rider_at(i as u32 + 1, pickup, (i % 4) as u32 + 1)
        })
        .collect()
}
