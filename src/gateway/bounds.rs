use crate::gateway::Bounds;
use crate::geo::GeodeticPoint;

const APPROX_EARTH_RADIUS_KM: f64 = 6371.0;

/// Square search zone centred on `center` whose sides lie `radius_m` from it.
pub fn bounds_by_point(center: &GeodeticPoint, radius_m: f64) -> Bounds {
    let half_side_km = radius_m.abs() / 1000.0;
    let lat = center.lat_rad();
    let lon = center.lon_rad();

    // angular distance from the centre to a corner
    let delta = (2.0 * half_side_km * half_side_km).sqrt() / APPROX_EARTH_RADIUS_KM;

    let (south, west) = destination(lat, lon, delta, 225f64.to_radians());
    let (north, east) = destination(lat, lon, delta, 45f64.to_radians());

    Bounds {
        north: north.to_degrees(),
        south: south.to_degrees(),
        west: west.to_degrees(),
        east: east.to_degrees(),
    }
}

fn destination(lat: f64, lon: f64, delta: f64, bearing: f64) -> (f64, f64) {
    let dest_lat = (lat.sin() * delta.cos() + lat.cos() * delta.sin() * bearing.cos()).asin();
    let dest_lon = lon
        + (bearing.sin() * delta.sin() * lat.cos()).atan2(delta.cos() - lat.sin() * dest_lat.sin());
    (dest_lat, dest_lon)
}
