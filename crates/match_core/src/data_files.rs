//! Plain-text driver and rider files.
//!
//! One record per line, fields separated by whitespace:
//!
//! ```text
//! # drivers.txt: id name lat lon capacity
//! 1 Alice 40.7128 -74.0060 4
//!
//! # riders.txt: id name pickup_lat pickup_lon dropoff_lat dropoff_lon passengers
//! 1 John 40.7128 -74.0060 40.7160 -74.0100 1
//! ```
//!
//! Names are a single token. Blank lines and `#` comments are skipped.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::agents::{Driver, Rider};
use crate::error::LoadError;
use crate::geo::Location;

pub const DRIVERS_FILE_NAME: &str = "drivers.txt";
pub const RIDERS_FILE_NAME: &str = "riders.txt";
pub const DEFAULT_DATA_DIR: &str = "data";

const DRIVER_FIELDS: usize = 5;
const RIDER_FIELDS: usize = 7;

/// Directory holding `drivers.txt` and `riders.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn drivers_path(&self) -> PathBuf {
        self.root.join(DRIVERS_FILE_NAME)
    }

    pub fn riders_path(&self) -> PathBuf {
        self.root.join(RIDERS_FILE_NAME)
    }

    pub fn load(&self) -> Result<(Vec<Driver>, Vec<Rider>), LoadError> {
        Ok((
            load_drivers(self.drivers_path())?,
            load_riders(self.riders_path())?,
        ))
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_drivers(path: impl AsRef<Path>) -> Result<Vec<Driver>, LoadError> {
    let path = path.as_ref();
    let drivers = parse_drivers(&read(path)?)?;
    debug!(path = %path.display(), count = drivers.len(), "loaded drivers");
    Ok(drivers)
}

pub fn load_riders(path: impl AsRef<Path>) -> Result<Vec<Rider>, LoadError> {
    let path = path.as_ref();
    let riders = parse_riders(&read(path)?)?;
    debug!(path = %path.display(), count = riders.len(), "loaded riders");
    Ok(riders)
}

/// Non-empty, non-comment lines with their 1-based line numbers.
fn records(input: &str) -> impl Iterator<Item = (usize, Vec<&str>)> + '_ {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| (line_no, line.split_whitespace().collect()))
}

fn expect_fields(line: usize, fields: &[&str], expected: usize) -> Result<(), LoadError> {
    if fields.len() != expected {
        return Err(LoadError::Malformed {
            line,
            reason: format!("expected {expected} fields, found {}", fields.len()),
        });
    }
    Ok(())
}

fn field<T: FromStr>(line: usize, name: &str, raw: &str) -> Result<T, LoadError> {
    raw.parse().map_err(|_| LoadError::Malformed {
        line,
        reason: format!("invalid {name} '{raw}'"),
    })
}

pub fn parse_drivers(input: &str) -> Result<Vec<Driver>, LoadError> {
    records(input)
        .map(|(line, fields)| -> Result<Driver, LoadError> {
            expect_fields(line, &fields, DRIVER_FIELDS)?;
            Ok(Driver::new(
                field(line, "id", fields[0])?,
                fields[1],
                field(line, "latitude", fields[2])?,
                field(line, "longitude", fields[3])?,
                field(line, "capacity", fields[4])?,
            ))
        })
        .collect()
}

pub fn parse_riders(input: &str) -> Result<Vec<Rider>, LoadError> {
    records(input)
        .map(|(line, fields)| -> Result<Rider, LoadError> {
            expect_fields(line, &fields, RIDER_FIELDS)?;
            let pickup = Location::new(
                field(line, "pickup latitude", fields[2])?,
                field(line, "pickup longitude", fields[3])?,
            );
            let dropoff = Location::new(
                field(line, "dropoff latitude", fields[4])?,
                field(line, "dropoff longitude", fields[5])?,
            );
            Ok(Rider::new(
                field(line, "id", fields[0])?,
                fields[1],
                pickup,
                dropoff,
                field(line, "passengers", fields[6])?,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{DriverId, RiderId};

    #[test]
    fn parses_drivers_skipping_comments() {
        let input = "# id name lat lon cap\n\n1 Alice 40.7128 -74.0060 4\n  2 Bob 40.7150 -74.0070 3  \n";
        let drivers = parse_drivers(input).expect("parse");
        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[1].id, DriverId(2));
        assert_eq!(drivers[1].name, "Bob");
        assert_eq!(drivers[1].capacity, 3);
    }

    #[test]
    fn parses_riders() {
        let riders =
            parse_riders("7 John 40.7128 -74.0060 40.7160 -74.0100 2").expect("parse");
        assert_eq!(riders[0].id, RiderId(7));
        assert_eq!(riders[0].dropoff, Location::new(40.7160, -74.0100));
        assert_eq!(riders[0].passengers, 2);
    }

    #[test]
    fn reports_line_of_bad_field() {
        let err = parse_drivers("1 Alice 40.7 -74.0 4\n2 Bob north -74.0 3\n").expect_err("bad");
        match err {
            LoadError::Malformed { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("latitude"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_wrong_field_count_and_negative_capacity() {
        assert!(matches!(
            parse_riders("1 John 40.7 -74.0 1"),
            Err(LoadError::Malformed { line: 1, .. })
        ));
        assert!(parse_drivers("1 Alice 40.7 -74.0 -2").is_err());
    }
}
