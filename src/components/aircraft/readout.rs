use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::AircraftState;
use crate::resources::FlightTuning;

/// Instrument values for on-screen display, recomputed every tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightReadout {
    /// Speed in display units (knots).
    pub speed: i64,
    /// Altitude in display units (feet).
    pub altitude: i64,
    pub throttle_percent: i64,
}

impl FlightReadout {
    pub fn from_state(state: &AircraftState, tuning: &FlightTuning) -> Self {
        Self {
            speed: round_half_up(state.speed() * 100.0),
            altitude: round_half_up(state.position.y),
            throttle_percent: round_half_up(state.thrust() / tuning.max_thrust * 100.0),
        }
    }
}

// Halves round towards +inf, so -2.5 reads as -2.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
