//! Rendering of match results: console table, JSON, CGI response and CSV.

use std::io;

use serde::{Serialize, Serializer};

use crate::agents::{Driver, DriverId, Rider, RiderId};
use crate::matching::Match;
use crate::roster::Roster;

pub const CGI_CONTENT_TYPE_HEADER: &str = "Content-Type: application/json\n\n";

const BANNER: &str = "========== RIDE MATCHING RESULTS ==========";
const FOOTER: &str = "==========================================";

/// One displayed match. Only names and the rounded distance go into JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(skip)]
    pub driver_id: DriverId,
    pub driver: String,
    #[serde(skip)]
    pub rider_id: RiderId,
    pub rider: String,
    /// Miles, rounded to 2 decimals. JSON always shows two places, e.g. `0.00`.
    #[serde(serialize_with = "two_decimals")]
    pub distance: f64,
    #[serde(skip)]
    pub passengers: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchReport {
    pub matches: Vec<ReportRow>,
    pub total: usize,
}

/// Write a number with exactly two fractional digits, as a JSON number.
fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let number: serde_json::Number = format!("{value:.2}")
        .parse()
        .map_err(serde::ser::Error::custom)?;
    number.serialize(serializer)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl MatchReport {
    /// Resolve names for `matches`. Ids with no record fall back to the id itself.
    pub fn new(matches: &[Match], drivers: &[Driver], riders: &[Rider]) -> Self {
        let rows: Vec<ReportRow> = matches
            .iter()
            .map(|m| ReportRow {
                driver_id: m.driver_id,
                driver: drivers
                    .iter()
                    .find(|d| d.id == m.driver_id)
                    .map_or_else(|| m.driver_id.to_string(), |d| d.name.clone()),
                rider_id: m.rider_id,
                rider: riders
                    .iter()
                    .find(|r| r.id == m.rider_id)
                    .map_or_else(|| m.rider_id.to_string(), |r| r.name.clone()),
                distance: round_to_cents(m.distance_miles),
                passengers: m.passengers,
            })
            .collect();
        Self {
            total: rows.len(),
            matches: rows,
        }
    }

    pub fn from_roster(roster: &Roster) -> Self {
        Self::new(roster.matches(), roster.drivers(), roster.riders())
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn render_table(&self) -> String {
        let mut out = format!("\n{BANNER}\nTotal Matches: {}\n", self.total);

        if self.matches.is_empty() {
            out.push_str("No matches found.\n");
        } else {
            out.push_str(&format!(
                "{:>12}{:>15}{:>15}\n{}\n",
                "Driver",
                "Rider",
                "Distance (mi)",
                "-".repeat(42)
            ));
            for row in &self.matches {
                out.push_str(&format!(
                    "{:>12}{:>15}{:>15.2}\n",
                    row.driver, row.rider, row.distance
                ));
            }
        }

        out.push_str(FOOTER);
        out.push('\n');
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// JSON body preceded by the CGI content-type header.
    pub fn to_cgi_response(&self) -> serde_json::Result<String> {
        Ok(format!("{CGI_CONTENT_TYPE_HEADER}{}", self.to_json()?))
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([
            "driver_id",
            "driver",
            "rider_id",
            "rider",
            "passengers",
            "distance_miles",
        ])?;
        for row in &self.matches {
            wtr.write_record([
                row.driver_id.to_string(),
                row.driver.clone(),
                row.rider_id.to_string(),
                row.rider.clone(),
                row.passengers.to_string(),
                format!("{:.2}", row.distance),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// CGI error response, e.g. `{"error":"Data files not found"}`.
pub fn cgi_error(message: &str) -> String {
    format!(
        "{CGI_CONTENT_TYPE_HEADER}{}",
        serde_json::json!({ "error": message })
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Location;

    fn sample_report() -> MatchReport {
        let drivers = vec![Driver::new(1, "Alice", 40.7128, -74.0060, 4)];
        let riders = vec![Rider::new(
            2,
            "John",
            Location::new(40.7150, -74.0070),
            Location::new(40.7160, -74.0100),
            1,
        )];
        let matches = vec![Match {
            driver_id: DriverId(1),
            rider_id: RiderId(2),
            distance_miles: 0.15867,
            passengers: 1,
        }];
        MatchReport::new(&matches, &drivers, &riders)
    }

    #[test]
    fn json_keeps_names_and_rounded_distance() {
        let json = sample_report().to_json().expect("json");
        assert_eq!(
            json,
            r#"{"matches":[{"driver":"Alice","rider":"John","distance":0.16}],"total":1}"#
        );
    }

    #[test]
    fn json_distance_keeps_two_decimal_places() {
        let drivers = vec![Driver::new(1, "Alice", 40.7128, -74.0060, 4)];
        let riders = vec![Rider::new(
            2,
            "John",
            Location::new(40.7128, -74.0060),
            Location::new(40.7160, -74.0100),
            1,
        )];
        let matches = vec![
            Match {
                driver_id: DriverId(1),
                rider_id: RiderId(2),
                distance_miles: 0.0,
                passengers: 1,
            },
            Match {
                driver_id: DriverId(1),
                rider_id: RiderId(2),
                distance_miles: 1.5,
                passengers: 1,
            },
        ];

        let json = MatchReport::new(&matches, &drivers, &riders)
            .to_json()
            .expect("json");

        assert!(json.contains(r#""distance":0.00}"#), "{json}");
        assert!(json.contains(r#""distance":1.50}"#), "{json}");
    }

    #[test]
    fn table_has_header_and_right_aligned_rows() {
        let table = sample_report().render_table();
        assert!(table.contains("Total Matches: 1"));
        assert!(table.contains(&format!("{:>12}{:>15}{:>15}", "Alice", "John", "0.16")));
    }

    #[test]
    fn empty_report_says_no_matches() {
        let report = MatchReport::new(&[], &[], &[]);
        assert!(report.render_table().contains("No matches found."));
        assert_eq!(report.to_json().expect("json"), r#"{"matches":[],"total":0}"#);
    }

    #[test]
    fn unknown_ids_fall_back_to_numbers() {
        let matches = vec![Match {
            driver_id: DriverId(9),
            rider_id: RiderId(8),
            distance_miles: 1.0,
            passengers: 1,
        }];
        let report = MatchReport::new(&matches, &[], &[]);
        assert_eq!(report.matches[0].driver, "9");
        assert_eq!(report.matches[0].rider, "8");
    }

    #[test]
    fn cgi_error_is_json_after_header() {
        assert_eq!(
            cgi_error("Data files not found"),
            "Content-Type: application/json\n\n{\"error\":\"Data files not found\"}"
        );
    }
}
