use bevy::prelude::*;
use nalgebra::UnitQuaternion;

use crate::components::{
    compose_attitude, AircraftState, ControlInputs, FlightMode, FlightReadout, ModeTransition,
    PreviousPose,
};
use crate::resources::{AttitudeModel, FlightTuning};
use crate::systems::flight::{air, apply_throttle, ground, AirData, TickSample};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub sample: TickSample,
    pub transition: Option<ModeTransition>,
    /// Present when the air model ran.
    pub air_data: Option<AirData>,
}

/// System advancing every aircraft by one tick. Runs in `FixedUpdate`.
pub fn flight_dynamics_system(
    mut query: Query<(&mut AircraftState, &ControlInputs, Option<&mut PreviousPose>)>,
    tuning: Res<FlightTuning>,
) {
    for (mut state, controls, previous) in query.iter_mut() {
        if let Some(mut previous) = previous {
            previous.0 = state.pose();
        }
        step_aircraft(&mut state, controls, &tuning);
    }
}

/// Refreshes the instrument readout from the state after each tick.
pub fn flight_readout_system(
    mut query: Query<(&AircraftState, &mut FlightReadout)>,
    tuning: Res<FlightTuning>,
) {
    for (state, mut readout) in query.iter_mut() {
        *readout = FlightReadout::from_state(state, &tuning);
    }
}

/// Advances the aircraft by exactly one tick.
///
/// Order matters: throttle, thrust along the previous attitude's nose axis,
/// the active mode's dynamics, uniform damping, position integration, ground
/// contact, and finally the new attitude.
pub fn step_aircraft(
    state: &mut AircraftState,
    controls: &ControlInputs,
    tuning: &FlightTuning,
) -> TickReport {
    let sample = TickSample::of(state, tuning);
    let (pitch, yaw, roll) = (state.pitch, state.yaw, state.roll);

    apply_throttle(state, controls, tuning);

    let thrust = state.forward_axis() * state.thrust();
    state.velocity += thrust;

    let (mut transition, air_data) = match state.mode() {
        FlightMode::Grounded => (ground::update(state, controls, tuning, sample), None),
        FlightMode::Airborne => (None, Some(air::update(state, controls, tuning, sample))),
    };

    state.velocity *= tuning.air_resistance;
    state.position += state.velocity;

    if let Some(landing) = state.evaluate_ground_contact(tuning) {
        transition = Some(landing);
    }

    state.attitude = match tuning.attitude_model {
        AttitudeModel::Composed => state.composed_attitude(),
        AttitudeModel::Incremental if transition == Some(ModeTransition::Landing) => {
            state.composed_attitude()
        }
        AttitudeModel::Incremental => incremental_attitude(
            &state.attitude,
            state.pitch - pitch,
            state.yaw - yaw,
            state.roll - roll,
        )
        .unwrap_or_else(|| state.composed_attitude()),
    };

    debug!(
        "tick: mode {:?}, speed {:.5}, altitude {:.3}, thrust {:.5}, air {:?}",
        state.mode(),
        state.speed(),
        state.position.y,
        state.thrust(),
        air_data
    );

    TickReport {
        sample,
        transition,
        air_data,
    }
}

/// Applies this tick's pitch, yaw and roll deltas as a body-frame rotation.
fn incremental_attitude(
    attitude: &UnitQuaternion<f64>,
    d_pitch: f64,
    d_yaw: f64,
    d_roll: f64,
) -> Option<UnitQuaternion<f64>> {
    let rotated = (attitude * compose_attitude(d_pitch, d_yaw, d_roll)).into_inner();
    let norm = rotated.norm();
    if !norm.is_finite() || norm < f64::EPSILON {
        warn!("Attitude degenerated (norm {}), rebuilding from angles", norm);
        return None;
    }
    Some(UnitQuaternion::new_normalize(rotated))
}
