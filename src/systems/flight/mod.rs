pub mod air;
pub mod ground;
mod integrator;
mod throttle;

pub use air::AirData;
pub use integrator::{flight_dynamics_system, flight_readout_system, step_aircraft, TickReport};
pub use throttle::apply_throttle;

use crate::components::AircraftState;
use crate::resources::FlightTuning;

/// Speed and air density sampled at the start of a tick, before thrust is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSample {
    pub speed: f64,
    pub air_density: f64,
}

impl TickSample {
    pub fn of(state: &AircraftState, tuning: &FlightTuning) -> Self {
        Self {
            speed: state.speed(),
            air_density: air::air_density(state.position.y, tuning),
        }
    }
}
