//! Great-circle distance on a spherical Earth.
//!
//! Distances are straight-line haversine miles; there is no road network.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Earth radius used for every distance in this crate, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Haversine distance to `other` in miles.
    pub fn distance_miles(&self, other: Location) -> f64 {
        distance_miles(self.lat, self.lng, other.lat, other.lng)
    }

    /// Reject non-finite or out-of-range coordinates.
    ///
    /// Only the roster calls this; the matcher accepts whatever it is given.
    /// NaN and the infinities fall outside both ranges.
    pub fn validate(&self) -> Result<(), RosterError> {
        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.lng) {
            return Err(RosterError::InvalidLocation {
                lat: self.lat,
                lng: self.lng,
            });
        }
        Ok(())
    }
}

/// Haversine distance between two points given in degrees, in miles.
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat
        + lat1.to_radians().cos() * lat2.to_radians().cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}
