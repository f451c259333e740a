use crate::components::{AircraftState, ControlInputs, ModeTransition, TakeoffCheck};
use crate::resources::FlightTuning;
use crate::systems::flight::TickSample;

/// Nose-wheel steering gain relative to `min_speed`.
const STEERING_GAIN: f64 = 0.008;
/// Ceiling on the steering rate before the ground effect factor.
const MAX_STEERING_RATE: f64 = 0.015;
/// Per-tick decay of bank while on the wheels.
const ROLL_DECAY: f64 = 0.8;
/// Per-tick decay of pitch when not rotating.
const PITCH_DECAY: f64 = 0.95;

/// Rolling, steering and takeoff rotation while on the runway.
///
/// The aircraft is pinned before any takeoff lift is added, so a liftoff climbs
/// at exactly that lift. Returns the takeoff transition if the aircraft left the
/// ground this tick; otherwise it ends pinned again with no vertical velocity.
pub fn update(
    state: &mut AircraftState,
    controls: &ControlInputs,
    tuning: &FlightTuning,
    sample: TickSample,
) -> Option<ModeTransition> {
    let speed = sample.speed;

    state.velocity *= tuning.ground_friction;
    pin_to_ground(state, tuning);

    let yaw_step = steering_rate(speed, tuning) * (1.0 + speed / 2.0);
    if controls.yaw_left {
        state.yaw -= yaw_step;
    }
    if controls.yaw_right {
        state.yaw += yaw_step;
    }

    let mut transition = None;
    if controls.pitch_up && speed > tuning.min_speed {
        state.pitch += tuning.rotation_speed;

        let lift = takeoff_lift(speed, state.pitch, tuning);
        state.velocity.y += lift;

        transition = state.evaluate_takeoff(
            TakeoffCheck {
                pitch_up_held: controls.pitch_up,
                speed,
                lift,
            },
            tuning,
        );
    }

    state.roll *= ROLL_DECAY;
    if !controls.pitch_up {
        state.pitch *= PITCH_DECAY;
    }

    if transition.is_none() {
        pin_to_ground(state, tuning);
    }

    transition
}

fn pin_to_ground(state: &mut AircraftState, tuning: &FlightTuning) {
    state.position.y = tuning.ground_height;
    state.velocity.y = 0.0;
}

/// Steering authority, fading out as the aircraft reaches `min_speed`.
pub fn steering_rate(speed: f64, tuning: &FlightTuning) -> f64 {
    let ground_effect = 1.0 - speed.min(tuning.min_speed) / tuning.min_speed;
    (STEERING_GAIN * (speed / tuning.min_speed)).min(MAX_STEERING_RATE) * ground_effect
}

/// Lift generated while rotating on the runway. Negative pitch produces none.
pub fn takeoff_lift(speed: f64, pitch: f64, tuning: &FlightTuning) -> f64 {
    speed * speed * tuning.lift_coefficient * pitch.max(0.0)
}
