pub mod flight;
pub mod physics;

pub use flight::{AttitudeModel, FlightTuning};
pub use physics::PhysicsConfig;
