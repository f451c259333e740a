use crate::components::{AircraftState, ControlInputs};
use crate::resources::FlightTuning;

/// Throttle-down removes thrust this much faster than the nominal increment.
const THROTTLE_DOWN_FACTOR: f64 = 1.5;

/// Applies the throttle controls to the thrust setting.
///
/// Throttle-up approaches `max_thrust` with diminishing steps; throttle-down
/// bleeds thrust linearly. Both are clamped to `[0, max_thrust]`.
pub fn apply_throttle(state: &mut AircraftState, controls: &ControlInputs, tuning: &FlightTuning) {
    if controls.throttle_up {
        let headroom = 1.0 - state.thrust() / tuning.max_thrust;
        let increase = tuning.thrust_increment * headroom;
        state.set_thrust(state.thrust() + increase, tuning.max_thrust);
    }
    if controls.throttle_down {
        let decrease = tuning.thrust_increment * THROTTLE_DOWN_FACTOR;
        state.set_thrust(state.thrust() - decrease, tuning.max_thrust);
    }
}
