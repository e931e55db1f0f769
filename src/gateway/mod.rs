mod bounds;
mod error;
mod flightradar;
mod types;

use async_trait::async_trait;

pub use bounds::bounds_by_point;
pub use error::GatewayError;
pub use flightradar::{Flightradar24Client, GatewayConfig};
pub use types::{AircraftObservation, Bounds, FlightDetails, FlightSummary, NOT_AVAILABLE, UNKNOWN};

use crate::geo::GeodeticPoint;

/// Source of live aircraft around a point.
///
/// Implementations are shared between requests and must not keep
/// per-request mutable state.
#[async_trait]
pub trait FlightDataGateway: Send + Sync {
    fn bounds_by_point(&self, center: &GeodeticPoint, radius_m: f64) -> Bounds {
        bounds_by_point(center, radius_m)
    }

    async fn list_flights(&self, bounds: &Bounds) -> Result<Vec<FlightSummary>, GatewayError>;

    async fn flight_details(
        &self,
        flight: &FlightSummary,
    ) -> Result<AircraftObservation, GatewayError>;
}
