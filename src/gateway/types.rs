use chrono::{DateTime, Utc};
use std::fmt;

use crate::geo::GeodeticPoint;

pub const UNKNOWN: &str = "Unknown";
/// Placeholder for text fields missing from a feed row.
pub const NOT_AVAILABLE: &str = "N/A";

/// One aircraft as listed by the area feed, before details are resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightSummary {
    pub id: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub heading_deg: f64,
    pub altitude_ft: f64,
    pub ground_speed_kt: f64,
    pub aircraft_code: String,
    pub registration: String,
    pub callsign: String,
    pub number: String,
    pub origin_iata: String,
    pub destination_iata: String,
    pub last_contact: Option<DateTime<Utc>>,
}

impl FlightSummary {
    pub fn position(&self) -> GeodeticPoint {
        GeodeticPoint::new(self.longitude_deg, self.latitude_deg, self.altitude_ft)
    }

    /// Callsign, else flight number, else the feed id.
    pub fn label(&self) -> &str {
        [&self.callsign, &self.number]
            .into_iter()
            .find(|s| !s.is_empty() && s.as_str() != NOT_AVAILABLE)
            .unwrap_or(&self.id)
    }

    /// Whole seconds between the last feed contact and `now`.
    pub fn seconds_since_contact(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_contact.map(|t| (now - t).num_seconds())
    }
}

impl fmt::Display for FlightSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<({}) {} - Altitude: {} - Ground Speed: {} - Heading: {}>",
            self.aircraft_code,
            self.registration,
            self.altitude_ft,
            self.ground_speed_kt,
            self.heading_deg
        )
    }
}

/// Descriptive fields of a flight returned by the detail lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightDetails {
    pub aircraft_type: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
}

impl Default for FlightDetails {
    fn default() -> Self {
        Self {
            aircraft_type: UNKNOWN.to_string(),
            airline: UNKNOWN.to_string(),
            origin: UNKNOWN.to_string(),
            destination: UNKNOWN.to_string(),
        }
    }
}

/// A fully resolved aircraft: feed position merged with its details.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftObservation {
    pub position: GeodeticPoint,
    pub heading_deg: f64,
    pub airline: String,
    pub aircraft_type: String,
    pub origin: String,
    pub destination: String,
}

impl AircraftObservation {
    pub fn from_parts(summary: &FlightSummary, details: FlightDetails) -> Self {
        Self {
            position: summary.position(),
            heading_deg: summary.heading_deg,
            airline: details.airline,
            aircraft_type: details.aircraft_type,
            origin: details.origin,
            destination: details.destination,
        }
    }

    pub fn altitude_ft(&self) -> f64 {
        self.position.altitude_ft
    }
}

/// Rectangular search zone in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl Bounds {
    #[cfg(test)]
    pub fn contains(&self, point: &GeodeticPoint) -> bool {
        (self.south..=self.north).contains(&point.latitude_deg)
            && (self.west..=self.east).contains(&point.longitude_deg)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.north, self.south, self.west, self.east)
    }
}
