/// Initial great-circle bearing from one point to another, in degrees [0, 360).
pub fn bearing_to(from_lat_deg: f64, from_lon_deg: f64, to_lat_deg: f64, to_lon_deg: f64) -> f64 {
    let from_lat = from_lat_deg.to_radians();
    let from_lon = from_lon_deg.to_radians();
    let to_lat = to_lat_deg.to_radians();
    let to_lon = to_lon_deg.to_radians();

    let dlon = to_lon - from_lon;
    let y = dlon.sin() * to_lat.cos();
    let x = from_lat.cos() * to_lat.sin() - from_lat.sin() * to_lat.cos() * dlon.cos();

    let deg = y.atan2(x).to_degrees();
    ((deg % 360.0) + 360.0) % 360.0
}
