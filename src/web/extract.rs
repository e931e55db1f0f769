use axum::{extract::FromRequestParts, extract::Query, http::request::Parts};
use serde::Deserialize;
use std::sync::Arc;

use crate::gateway::FlightDataGateway;
use crate::geo::GeodeticPoint;

use super::api::error::{ApiError, INVALID_LOCATION};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn FlightDataGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn FlightDataGateway>) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LocationQuery {
    longitude: Option<String>,
    latitude: Option<String>,
    altitude: Option<String>,
}

/// Caller position taken from the `longitude`, `latitude` and optional
/// `altitude` (feet) query parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserLocation(pub GeodeticPoint);

impl UserLocation {
    fn from_query(query: &LocationQuery) -> Option<Self> {
        let longitude = parse_coordinate(query.longitude.as_deref()?)?;
        let latitude = parse_coordinate(query.latitude.as_deref()?)?;
        let altitude = match query.altitude.as_deref() {
            Some(alt) => parse_coordinate(alt)?,
            None => 0.0,
        };
        Some(UserLocation(GeodeticPoint::new(longitude, latitude, altitude)))
    }
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl<S> FromRequestParts<S> for UserLocation
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<LocationQuery>::try_from_uri(&parts.uri)
            .map_err(|_| ApiError::Validation(INVALID_LOCATION))?;

        UserLocation::from_query(&query).ok_or(ApiError::Validation(INVALID_LOCATION))
    }
}
