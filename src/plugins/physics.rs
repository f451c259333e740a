use bevy::prelude::*;

use crate::components::{
    AircraftState, ControlInputs, FlightReadout, PlayerController, PreviousPose, RenderPose,
};
use crate::resources::{FlightTuning, PhysicsConfig};
use crate::systems::{flight_dynamics_system, flight_readout_system, to_render_quat, to_render_vec3};

/// Per-tick stages, chained in `FixedUpdate`.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    /// Anything that writes `ControlInputs` on the fixed clock.
    Input,
    Dynamics,
    Readout,
}

/// Runs the flight model on a fixed timestep and spawns the aircraft.
#[derive(Default)]
pub struct FlightDynamicsPlugin {
    pub tuning: FlightTuning,
    pub physics: PhysicsConfig,
}

impl FlightDynamicsPlugin {
    pub fn new(tuning: FlightTuning, physics: PhysicsConfig) -> Self {
        Self { tuning, physics }
    }

    pub fn with_tuning(tuning: FlightTuning) -> Self {
        Self {
            tuning,
            ..Default::default()
        }
    }

    fn spawn_aircraft(mut commands: Commands, tuning: Res<FlightTuning>) {
        let state = AircraftState::at_start(&tuning);
        let pose = state.pose();
        info!(
            "Spawning aircraft at {:?}, heading {:.3}",
            state.position, state.yaw
        );

        commands.spawn((
            Name::new("Aircraft"),
            FlightReadout::from_state(&state, &tuning),
            Transform::from_translation(to_render_vec3(&pose.position))
                .with_rotation(to_render_quat(&pose.attitude)),
            state,
            ControlInputs::neutral(),
            PreviousPose(pose),
            RenderPose(pose),
            PlayerController::new(),
        ));
    }
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        let tuning = match self.tuning.validate() {
            Ok(()) => self.tuning.clone(),
            Err(err) => {
                warn!("{}; falling back to default tuning", err);
                FlightTuning::default()
            }
        };
        let physics = match self.physics.validate() {
            Ok(()) => self.physics.clone(),
            Err(err) => {
                warn!("{}; falling back to default timestep", err);
                PhysicsConfig::default()
            }
        };

        app.insert_resource(Time::<Fixed>::from_seconds(physics.timestep))
            .insert_resource(tuning)
            .insert_resource(physics);

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Input, FlightSet::Dynamics, FlightSet::Readout).chain(),
        );

        app.add_systems(Startup, Self::spawn_aircraft).add_systems(
            FixedUpdate,
            (
                flight_dynamics_system.in_set(FlightSet::Dynamics),
                flight_readout_system.in_set(FlightSet::Readout),
            ),
        );
    }
}
