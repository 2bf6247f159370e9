use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::Location;

/// Stable driver identifier, unique within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub u32);

/// Stable rider identifier, unique within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiderId(pub u32);

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RiderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub location: Location,
    /// Seats available at the start of a matching run.
    pub capacity: u32,
}

impl Driver {
    pub fn new(id: u32, name: impl Into<String>, lat: f64, lng: f64, capacity: u32) -> Self {
        Self {
            id: DriverId(id),
            name: name.into(),
            location: Location::new(lat, lng),
            capacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub id: RiderId,
    pub name: String,
    pub pickup: Location,
    /// Display only; matching never looks at it.
    pub dropoff: Location,
    /// Seats required.
    pub passengers: u32,
}

impl Rider {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        pickup: Location,
        dropoff: Location,
        passengers: u32,
    ) -> Self {
        Self {
            id: RiderId(id),
            name: name.into(),
            pickup,
            dropoff,
            passengers,
        }
    }
}

/// Driver fields as entered by a user, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDriver {
    pub name: String,
    pub location: Location,
    pub capacity: u32,
}

/// Rider fields as entered by a user, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRider {
    pub name: String,
    pub pickup: Location,
    pub dropoff: Location,
    pub passengers: u32,
}
