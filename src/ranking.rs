use std::fmt::Display;

use crate::gateway::AircraftObservation;
use crate::geo::{bearing_to, to_cartesian, CartesianPoint, GeodeticPoint};

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(AircraftObservation),
    Unresolved(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedObservation {
    pub distance_m: f64,
    pub bearing_deg: f64,
    pub resolution: Resolution,
}

impl RankedObservation {
    /// `user_ecef` must be the Cartesian form of `user`.
    pub fn locate(
        user: &GeodeticPoint,
        user_ecef: &CartesianPoint,
        observation: AircraftObservation,
    ) -> Self {
        let aircraft = observation.position;
        let distance_m = user_ecef.distance_to(&aircraft.to_cartesian());
        let bearing_deg = bearing_to(
            user.latitude_deg,
            user.longitude_deg,
            aircraft.latitude_deg,
            aircraft.longitude_deg,
        );
        Self {
            distance_m,
            bearing_deg,
            resolution: Resolution::Resolved(observation),
        }
    }

    pub fn unresolved(message: impl Into<String>) -> Self {
        Self {
            distance_m: f64::INFINITY,
            bearing_deg: 0.0,
            resolution: Resolution::Unresolved(message.into()),
        }
    }

    pub fn observation(&self) -> Option<&AircraftObservation> {
        match &self.resolution {
            Resolution::Resolved(obs) => Some(obs),
            Resolution::Unresolved(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.resolution {
            Resolution::Resolved(_) => None,
            Resolution::Unresolved(msg) => Some(msg),
        }
    }
}

/// Orders observations by straight-line distance from `user`, closest first.
///
/// Failed lookups are kept with an infinite distance so they sort last;
/// equal distances keep their input order.
pub fn rank<I, E>(user: &GeodeticPoint, observations: I) -> Vec<RankedObservation>
where
    I: IntoIterator<Item = Result<AircraftObservation, E>>,
    E: Display,
{
    let user_ecef = to_cartesian(user.longitude_deg, user.latitude_deg, user.altitude_ft);
    let mut ranked: Vec<RankedObservation> = observations
        .into_iter()
        .map(|result| match result {
            Ok(obs) => RankedObservation::locate(user, &user_ecef, obs),
            Err(e) => RankedObservation::unresolved(e.to_string()),
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    ranked
}
