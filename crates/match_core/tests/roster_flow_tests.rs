mod support;

use match_core::agents::{DriverId, NewDriver, NewRider, RiderId};
use match_core::error::RosterError;
use match_core::geo::Location;
use match_core::matching::{Match, MatchOutcome, MatchingAlgorithm};
use match_core::report::MatchReport;
use match_core::roster::{Roster, RosterStats};
use match_core::sampling::SampleParams;
use match_core::{Driver, Rider};

use support::miles_north;

fn driver_input(name: &str, miles: f64, capacity: u32) -> NewDriver {
    NewDriver {
        name: name.to_string(),
        location: miles_north(miles),
        capacity,
    }
}

fn rider_input(name: &str, miles: f64, passengers: u32) -> NewRider {
    NewRider {
        name: name.to_string(),
        pickup: miles_north(miles),
        dropoff: miles_north(miles + 1.0),
        passengers,
    }
}

#[test]
fn matching_requires_both_sides() {
    let mut roster = Roster::new();
    assert_eq!(roster.run_matching().err(), Some(RosterError::NoDrivers));

    roster.add_driver(driver_input("Alice", 0.0, 4)).expect("driver");
    assert_eq!(roster.run_matching().err(), Some(RosterError::NoRiders));
}

#[test]
fn add_match_remove_flow() {
    let mut roster = Roster::new();
    let alice = roster.add_driver(driver_input("Alice", 0.0, 2)).expect("driver");
    let bob = roster.add_driver(driver_input("Bob", 3.0, 1)).expect("driver");
    let john = roster.add_rider(rider_input("John", 0.2, 2)).expect("rider");
    let sarah = roster.add_rider(rider_input("Sarah", 0.3, 2)).expect("rider");

    let matches = roster.run_matching().expect("matching").to_vec();
    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].driver_id, matches[0].rider_id), (alice, john));

    let unmatched: Vec<RiderId> = roster.unmatched_riders().map(|r| r.id).collect();
    assert_eq!(unmatched, vec![sarah]);
    assert_eq!(
        roster.stats(),
        RosterStats {
            drivers: 2,
            riders: 2,
            matches: 1
        }
    );

    // Removing a rider invalidates the previous result.
    assert!(roster.remove_rider(john));
    assert!(roster.matches().is_empty());
    assert!(!roster.remove_rider(john));

    let matches = roster.run_matching().expect("matching").to_vec();
    assert_eq!((matches[0].driver_id, matches[0].rider_id), (alice, sarah));
    assert!(roster.driver(bob).is_some());
    assert!(roster.rider(john).is_none());
}

#[test]
fn report_resolves_roster_names() {
    let mut roster = Roster::new();
    roster.add_driver(driver_input("Alice", 0.0, 4)).expect("driver");
    roster.add_rider(rider_input("John", 1.0, 1)).expect("rider");
    roster.run_matching().expect("matching");

    let report = MatchReport::from_roster(&roster);

    assert_eq!(report.total, 1);
    assert_eq!(report.matches[0].driver, "Alice");
    assert_eq!(report.matches[0].rider, "John");
    assert!((report.matches[0].distance - 1.0).abs() < 0.01);
}

#[test]
fn sample_replaces_roster_and_clears_matches() {
    let mut roster = Roster::new();
    roster.add_driver(driver_input("Alice", 0.0, 4)).expect("driver");
    roster.add_rider(rider_input("John", 1.0, 1)).expect("rider");
    roster.run_matching().expect("matching");

    roster.load_sample(&SampleParams::default().with_seed(11));

    let stats = roster.stats();
    assert!((6..=10).contains(&stats.drivers));
    assert!((8..=14).contains(&stats.riders));
    assert_eq!(stats.matches, 0);

    let next = roster.add_driver(driver_input("Extra", 0.0, 1)).expect("driver");
    assert_eq!(next, DriverId(stats.drivers as u32 + 1));
}

#[test]
fn from_records_continues_ids_after_largest() {
    let drivers = vec![Driver::new(4, "Alice", 40.71, -74.0, 2)];
    let riders = vec![Rider::new(
        9,
        "John",
        Location::new(40.71, -74.0),
        Location::new(40.72, -74.0),
        1,
    )];
    let mut roster = Roster::from_records(drivers, riders).expect("roster");

    assert_eq!(roster.add_driver(driver_input("Bob", 0.0, 1)), Ok(DriverId(5)));
    assert_eq!(roster.add_rider(rider_input("Sarah", 0.0, 1)), Ok(RiderId(10)));
}

#[test]
fn from_records_rejects_zero_passengers_and_bad_coordinates() {
    let driver = || Driver::new(1, "Alice", 40.71, -74.0, 2);
    let rider = |passengers, dropoff_lat| {
        Rider::new(
            1,
            "John",
            Location::new(40.7, -74.0),
            Location::new(dropoff_lat, -74.0),
            passengers,
        )
    };

    let err = Roster::from_records(vec![driver()], vec![rider(0, 40.7)]).expect_err("zero seats");
    assert_eq!(err, RosterError::ZeroPassengers);

    let err = Roster::from_records(vec![driver()], vec![rider(1, 400.0)]).expect_err("bad dropoff");
    assert!(matches!(err, RosterError::InvalidLocation { lat, .. } if lat == 400.0));

    let empty_seats = Driver::new(2, "Bob", 40.71, -74.0, 0);
    let err = Roster::from_records(vec![empty_seats], vec![rider(1, 40.7)]).expect_err("no seats");
    assert_eq!(err, RosterError::ZeroCapacity);

    let off_map = Driver::new(3, "Kyle", 40.71, 200.0, 4);
    let err = Roster::from_records(vec![off_map], Vec::new()).expect_err("bad location");
    assert!(matches!(err, RosterError::InvalidLocation { .. }));
}

/// Matches every rider to the first driver, ignoring seats.
struct FirstDriver;

impl MatchingAlgorithm for FirstDriver {
    fn run(&self, drivers: &[Driver], riders: &[Rider]) -> MatchOutcome {
        let Some(first) = drivers.first() else {
            return MatchOutcome::default();
        };
        MatchOutcome {
            matches: riders
                .iter()
                .map(|r| Match {
                    driver_id: first.id,
                    rider_id: r.id,
                    distance_miles: first.location.distance_miles(r.pickup),
                    passengers: r.passengers,
                })
                .collect(),
            remaining_capacity: Vec::new(),
            unmatched: Vec::new(),
        }
    }
}

#[test]
fn roster_uses_supplied_algorithm() {
    let mut roster = Roster::with_algorithm(Box::new(FirstDriver));
    roster.add_driver(driver_input("Far", 9.0, 1)).expect("driver");
    roster.add_driver(driver_input("Near", 0.0, 1)).expect("driver");
    roster.add_rider(rider_input("John", 0.0, 3)).expect("rider");

    let matches = roster.run_matching().expect("matching");

    assert_eq!(matches[0].driver_id, DriverId(1));
}
