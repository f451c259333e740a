pub mod config;
mod errors;

pub use config::{AttitudeModel, FlightTuning, PhysicsConfig};
pub use errors::{ConfigError, Result};
