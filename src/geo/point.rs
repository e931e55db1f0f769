// WGS-84 constants
const SEMI_MAJOR_AXIS_M: f64 = 6378137.0;
const ECCENTRICITY_SQ: f64 = 0.006694379990197619;
const ONE_MINUS_ECCENTRICITY_SQ: f64 = 0.9933056200098024;

pub const FEET_TO_METERS: f64 = 0.3048;

/// A position on the WGS-84 ellipsoid. Altitude is in feet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeodeticPoint {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub altitude_ft: f64,
}

impl GeodeticPoint {
    pub fn new(longitude_deg: f64, latitude_deg: f64, altitude_ft: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
            altitude_ft,
        }
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    pub fn to_cartesian(&self) -> CartesianPoint {
        to_cartesian(self.longitude_deg, self.latitude_deg, self.altitude_ft)
    }
}

/// Earth-centered, earth-fixed position in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub fn distance_to(&self, other: &CartesianPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

pub fn to_cartesian(longitude_deg: f64, latitude_deg: f64, altitude_ft: f64) -> CartesianPoint {
    let lat = latitude_deg.to_radians();
    let lon = longitude_deg.to_radians();
    let alt_m = altitude_ft * FEET_TO_METERS;

    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    // prime vertical radius of curvature
    let n = SEMI_MAJOR_AXIS_M / (1.0 - ECCENTRICITY_SQ * sin_lat * sin_lat).sqrt();

    CartesianPoint {
        x: (n + alt_m) * cos_lat * cos_lon,
        y: (n + alt_m) * cos_lat * sin_lon,
        z: (ONE_MINUS_ECCENTRICITY_SQ * n + alt_m) * sin_lat,
    }
}
