pub mod aircraft;
pub mod error;
