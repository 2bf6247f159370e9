//! Error types for the roster and data-file layers.
//!
//! The matcher has no error type: an unmatched rider is a normal outcome.

use std::path::PathBuf;

use thiserror::Error;

use crate::agents::{DriverId, RiderId};

/// Input rejected by the session roster.
#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("invalid location ({lat}, {lng})")]
    InvalidLocation { lat: f64, lng: f64 },

    #[error("driver capacity must be at least 1")]
    ZeroCapacity,

    #[error("rider passenger count must be at least 1")]
    ZeroPassengers,

    #[error("duplicate driver id {0}")]
    DuplicateDriver(DriverId),

    #[error("duplicate rider id {0}")]
    DuplicateRider(RiderId),

    /// Matching needs at least one driver.
    #[error("need at least one driver to perform matching")]
    NoDrivers,

    /// Matching needs at least one rider.
    #[error("need at least one rider to perform matching")]
    NoRiders,
}

/// Failure reading a driver or rider data file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}
