use axum::{extract::State, http::StatusCode, response::Response};

use crate::nearby::{nearby_aircraft, CLOSEST_RADIUS_M, LISTING_RADIUS_M};
use crate::report;
use crate::web::api::error::{plain_text, ApiResult};
use crate::web::extract::{AppState, UserLocation};

#[utoipa::path(
    get,
    path = "/",
    tag = "aircraft",
    params(
        ("longitude" = f64, Query, description = "Longitude (degrees)"),
        ("latitude" = f64, Query, description = "Latitude (degrees)"),
        ("altitude" = Option<f64>, Query, description = "Altitude above the ellipsoid (feet)")
    ),
    responses(
        (status = 200, description = "Aircraft within 20 km, closest first", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid parameters", body = String, content_type = "text/plain"),
        (status = 500, description = "Flight data unavailable", body = String, content_type = "text/plain")
    )
)]
pub async fn list_aircraft(
    State(state): State<AppState>,
    UserLocation(user): UserLocation,
) -> ApiResult<Response> {
    let ranked = nearby_aircraft(state.gateway.as_ref(), &user, LISTING_RADIUS_M).await?;
    let unresolved = ranked.iter().filter(|r| r.error_message().is_some()).count();
    log::info!(
        "{} aircraft ({} unresolved) near {:.4},{:.4}",
        ranked.len(),
        unresolved,
        user.latitude_deg,
        user.longitude_deg
    );
    Ok(plain_text(StatusCode::OK, report::listing(&ranked)))
}

#[utoipa::path(
    get,
    path = "/closest",
    tag = "aircraft",
    params(
        ("longitude" = f64, Query, description = "Longitude (degrees)"),
        ("latitude" = f64, Query, description = "Latitude (degrees)"),
        ("altitude" = Option<f64>, Query, description = "Altitude above the ellipsoid (feet)")
    ),
    responses(
        (status = 200, description = "Closest aircraft within 10 km", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid parameters", body = String, content_type = "text/plain"),
        (status = 500, description = "Flight data unavailable", body = String, content_type = "text/plain")
    )
)]
pub async fn closest_aircraft(
    State(state): State<AppState>,
    UserLocation(user): UserLocation,
) -> ApiResult<Response> {
    let ranked = nearby_aircraft(state.gateway.as_ref(), &user, CLOSEST_RADIUS_M).await?;
    Ok(plain_text(StatusCode::OK, report::closest(&ranked)))
}
