use thiserror::Error;

use crate::gateway::{AircraftObservation, FlightDataGateway, FlightSummary, GatewayError};
use crate::geo::GeodeticPoint;
use crate::ranking::{rank, RankedObservation};

pub const LISTING_RADIUS_M: f64 = 20_000.0;
pub const CLOSEST_RADIUS_M: f64 = 10_000.0;

#[derive(Debug, Error)]
pub enum NearbyError {
    #[error("Error fetching flight data: {0}")]
    Upstream(#[from] GatewayError),
}

/// A single flight whose details could not be fetched.
#[derive(Debug, Error)]
#[error("Error processing flight {flight}: {source}")]
pub struct ResolveError {
    pub flight: String,
    pub source: GatewayError,
}

/// Lists aircraft within `radius_m` of `user`, resolves each one and ranks
/// them by distance.
pub async fn nearby_aircraft(
    gateway: &dyn FlightDataGateway,
    user: &GeodeticPoint,
    radius_m: f64,
) -> Result<Vec<RankedObservation>, NearbyError> {
    let bounds = gateway.bounds_by_point(user, radius_m);
    let flights = gateway.list_flights(&bounds).await.map_err(|e| {
        log::error!("Failed to list flights in {}: {}", bounds, e);
        e
    })?;

    log::debug!("{} flights within {}", flights.len(), bounds);

    let mut resolved = Vec::with_capacity(flights.len());
    for flight in &flights {
        resolved.push(resolve(gateway, flight).await);
    }

    Ok(rank(user, resolved))
}

async fn resolve(
    gateway: &dyn FlightDataGateway,
    flight: &FlightSummary,
) -> Result<AircraftObservation, ResolveError> {
    gateway.flight_details(flight).await.map_err(|source| {
        log::warn!(
            "Failed to fetch details for {} ({}): {}",
            flight.label(),
            flight.id,
            source
        );
        ResolveError {
            flight: flight.to_string(),
            source,
        }
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::gateway::Bounds;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory gateway serving a fixed set of flights.
    pub struct StaticGateway {
        pub flights: Vec<(FlightSummary, Option<AircraftObservation>)>,
        pub fail_listing: bool,
        pub requested_bounds: Mutex<Vec<Bounds>>,
    }

    impl StaticGateway {
        pub fn new(flights: Vec<(FlightSummary, Option<AircraftObservation>)>) -> Self {
            Self {
                flights,
                fail_listing: false,
                requested_bounds: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                fail_listing: true,
                ..Self::new(Vec::new())
            }
        }
    }

    #[async_trait]
    impl FlightDataGateway for StaticGateway {
        async fn list_flights(&self, bounds: &Bounds) -> Result<Vec<FlightSummary>, GatewayError> {
            self.requested_bounds.lock().unwrap().push(*bounds);
            if self.fail_listing {
                return Err(GatewayError::Decode("feed unavailable".into()));
            }
            Ok(self.flights.iter().map(|(f, _)| f.clone()).collect())
        }

        async fn flight_details(
            &self,
            flight: &FlightSummary,
        ) -> Result<AircraftObservation, GatewayError> {
            self.flights
                .iter()
                .find(|(f, _)| f.id == flight.id)
                .and_then(|(_, obs)| obs.clone())
                .ok_or_else(|| GatewayError::Decode("no details".into()))
        }
    }

    pub fn flight(id: &str, lon: f64, lat: f64, alt_ft: f64) -> FlightSummary {
        FlightSummary {
            id: id.to_string(),
            longitude_deg: lon,
            latitude_deg: lat,
            altitude_ft: alt_ft,
            heading_deg: 180.0,
            aircraft_code: "B738".to_string(),
            registration: format!("G-{}", id.to_uppercase()),
            ..Default::default()
        }
    }

    pub fn observation(summary: &FlightSummary, airline: &str) -> AircraftObservation {
        AircraftObservation {
            position: summary.position(),
            heading_deg: summary.heading_deg,
            airline: airline.to_string(),
            aircraft_type: "Boeing 737-8AS".to_string(),
            origin: "Dublin Airport".to_string(),
            destination: "London Stansted Airport".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ranks_resolved_and_keeps_failures() {
        let near = flight("near", -0.1, 51.509, 0.0);
        let far = flight("far", -0.1, 51.6, 8000.0);
        let broken = flight("broken", -0.1, 51.5, 0.0);
        let gateway = StaticGateway::new(vec![
            (far.clone(), Some(observation(&far, "Far Air"))),
            (broken.clone(), None),
            (near.clone(), Some(observation(&near, "Near Air"))),
        ]);

        let user = GeodeticPoint::new(-0.1, 51.5, 0.0);
        let ranked = nearby_aircraft(&gateway, &user, LISTING_RADIUS_M)
            .await
            .unwrap();

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].observation().unwrap().airline, "Near Air");
        assert_eq!(ranked[1].observation().unwrap().airline, "Far Air");
        let message = ranked[2].error_message().unwrap();
        assert!(
            message.starts_with("Error processing flight <(B738) G-BROKEN"),
            "{message}"
        );
    }

    #[tokio::test]
    async fn test_queries_bounds_around_user() {
        let gateway = StaticGateway::new(Vec::new());
        let user = GeodeticPoint::new(2.35, 48.85, 0.0);
        let ranked = nearby_aircraft(&gateway, &user, CLOSEST_RADIUS_M)
            .await
            .unwrap();
        assert!(ranked.is_empty());

        let requested = gateway.requested_bounds.lock().unwrap();
        assert_eq!(requested.len(), 1);
        assert!(requested[0].contains(&user));
    }

    #[tokio::test]
    async fn test_listing_failure_is_upstream_error() {
        let gateway = StaticGateway::failing();
        let user = GeodeticPoint::new(-0.1, 51.5, 0.0);
        let err = nearby_aircraft(&gateway, &user, LISTING_RADIUS_M)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error fetching flight data: Invalid response: feed unavailable"
        );
    }
}
