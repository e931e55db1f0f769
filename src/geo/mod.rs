mod bearing;
mod point;

pub use bearing::bearing_to;
pub use point::{to_cartesian, CartesianPoint, GeodeticPoint};
