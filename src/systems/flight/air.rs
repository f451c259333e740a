use serde::{Deserialize, Serialize};

use crate::components::{AircraftState, ControlInputs};
use crate::resources::FlightTuning;
use crate::systems::flight::TickSample;

/// Elevator rate at full control effectiveness (rad per tick).
const PITCH_RATE: f64 = 0.008;
/// Aileron rate at full control effectiveness (rad per tick).
const ROLL_RATE: f64 = 0.012;
/// Yaw induced by each aileron input, grows with bank.
const ROLL_INDUCED_YAW_RATE: f64 = 0.003;
/// Rudder rate at full control effectiveness (rad per tick).
const RUDDER_RATE: f64 = 0.008;
/// Angle of attack past the stall over which lift falls to zero (rad).
const STALL_LIFT_SPAN: f64 = 0.5;
/// Drag growth per radian of angle of attack.
const INDUCED_DRAG_FACTOR: f64 = 2.0;
const ROLL_LEVELING: f64 = 0.985;
const PITCH_LEVELING: f64 = 0.99;

/// Aerodynamic quantities computed during one airborne update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    pub angle_of_attack: f64,
    pub lift_multiplier: f64,
    pub lift: f64,
    pub drag: f64,
    pub air_density: f64,
    pub control_effectiveness: f64,
}

/// Gravity, lift, drag and control response while flying.
pub fn update(
    state: &mut AircraftState,
    controls: &ControlInputs,
    tuning: &FlightTuning,
    sample: TickSample,
) -> AirData {
    let speed = sample.speed;
    let air_density = sample.air_density;

    state.velocity.y -= tuning.gravity;

    let angle_of_attack = angle_of_attack(state);
    let lift_multiplier = lift_multiplier(angle_of_attack, tuning);
    let dynamic = speed * speed * air_density;

    let lift = dynamic * tuning.lift_coefficient * angle_of_attack.cos() * lift_multiplier;
    let drag = dynamic
        * tuning.drag_coefficient
        * (1.0 + angle_of_attack.abs() * INDUCED_DRAG_FACTOR);

    state.velocity.y += lift;
    state.velocity *= 1.0 - drag;

    let control_effectiveness = control_effectiveness(speed, air_density, tuning);
    apply_controls(state, controls, control_effectiveness);

    AirData {
        angle_of_attack,
        lift_multiplier,
        lift,
        drag,
        air_density,
        control_effectiveness,
    }
}

fn apply_controls(state: &mut AircraftState, controls: &ControlInputs, effectiveness: f64) {
    if controls.pitch_up {
        state.pitch -= PITCH_RATE * effectiveness;
    }
    if controls.pitch_down {
        state.pitch += PITCH_RATE * effectiveness;
    }
    if controls.roll_left {
        state.roll -= ROLL_RATE * effectiveness;
        state.yaw -= ROLL_INDUCED_YAW_RATE * effectiveness * (1.0 + state.roll.abs());
    }
    if controls.roll_right {
        state.roll += ROLL_RATE * effectiveness;
        state.yaw += ROLL_INDUCED_YAW_RATE * effectiveness * (1.0 + state.roll.abs());
    }
    if controls.yaw_left {
        state.yaw -= RUDDER_RATE * effectiveness;
    }
    if controls.yaw_right {
        state.yaw += RUDDER_RATE * effectiveness;
    }

    if !controls.any_roll() {
        state.roll *= ROLL_LEVELING;
    }
    if !controls.any_pitch() {
        state.pitch *= PITCH_LEVELING;
    }
}

/// Flight path angle below the horizon plus pitch (rad).
pub fn angle_of_attack(state: &AircraftState) -> f64 {
    (-state.velocity.y).atan2(state.horizontal_speed()) + state.pitch
}

/// Fraction of full lift available at the given angle of attack.
///
/// Linear from zero up to `optimal_aoa` (negative below zero), one up to the
/// stall, then falling linearly to zero at `stall_angle + 0.5`.
pub fn lift_multiplier(angle_of_attack: f64, tuning: &FlightTuning) -> f64 {
    let magnitude = angle_of_attack.abs();

    if magnitude >= tuning.stall_angle + STALL_LIFT_SPAN {
        0.0
    } else if magnitude > tuning.stall_angle {
        (1.0 - (magnitude - tuning.stall_angle) / STALL_LIFT_SPAN).max(0.0)
    } else if magnitude < tuning.optimal_aoa {
        angle_of_attack / tuning.optimal_aoa
    } else {
        1.0
    }
}

/// Air density relative to ground level.
pub fn air_density(altitude: f64, tuning: &FlightTuning) -> f64 {
    (-altitude / tuning.density_scale_height).exp()
}

/// Control authority, reduced at low speed and in thin air.
pub fn control_effectiveness(speed: f64, air_density: f64, tuning: &FlightTuning) -> f64 {
    (speed / tuning.min_speed).min(1.0) * air_density
}
