use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AircraftState, CameraPose, ChaseCamera, ControlInputs, FlightReadout, Pose};
use crate::resources::{FlightTuning, PhysicsConfig};
use crate::systems::{step_aircraft, TickReport};

/// Engine-free flight simulation: one aircraft, one tuning, a fixed-step clock.
///
/// The Bevy plugins run the same tick through `FixedUpdate`; this type is for
/// hosts that drive the loop themselves.
#[derive(Debug, Clone)]
pub struct FlightSimulator {
    state: AircraftState,
    previous: Pose,
    tuning: FlightTuning,
    physics: PhysicsConfig,
    accumulator: f64,
    tick_count: u64,
}

impl FlightSimulator {
    /// Invalid configuration is logged and replaced by the defaults.
    pub fn new(tuning: FlightTuning, physics: PhysicsConfig) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(err) => {
                warn!("{}; falling back to default tuning", err);
                FlightTuning::default()
            }
        };
        let physics = match physics.validate() {
            Ok(()) => physics,
            Err(err) => {
                warn!("{}; falling back to default timestep", err);
                PhysicsConfig::default()
            }
        };

        let state = AircraftState::at_start(&tuning);
        let previous = state.pose();
        Self {
            state,
            previous,
            tuning,
            physics,
            accumulator: 0.0,
            tick_count: 0,
        }
    }

    /// Runs exactly one tick with the given intents.
    pub fn tick(&mut self, controls: &ControlInputs) -> TickReport {
        self.previous = self.state.pose();
        self.tick_count += 1;
        step_aircraft(&mut self.state, controls, &self.tuning)
    }

    /// Accrues `frame_seconds` of wall time and runs every whole tick it covers.
    ///
    /// At most `max_substeps` ticks run per call; time beyond that is dropped.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, frame_seconds: f64, controls: &ControlInputs) -> u32 {
        if frame_seconds.is_finite() && frame_seconds > 0.0 {
            self.accumulator += frame_seconds;
        }

        let timestep = self.physics.timestep;
        let mut ticks = 0;
        while self.accumulator >= timestep && ticks < self.physics.max_substeps {
            self.tick(controls);
            self.accumulator -= timestep;
            ticks += 1;
        }

        if self.accumulator >= timestep {
            warn!(
                "Simulation falling behind: dropping {:.4}s after {} ticks",
                self.accumulator, ticks
            );
            self.accumulator %= timestep;
        }

        ticks
    }

    /// Fraction of a tick accrued but not yet simulated, in `[0, 1)`.
    pub fn overstep_fraction(&self) -> f64 {
        self.accumulator / self.physics.timestep
    }

    /// Pose between the last two ticks, for presentation at frame rate.
    pub fn interpolated_pose(&self) -> Pose {
        self.previous
            .interpolate(&self.state.pose(), self.overstep_fraction())
    }

    pub fn readout(&self) -> FlightReadout {
        FlightReadout::from_state(&self.state, &self.tuning)
    }

    /// Chase camera placement behind the current state.
    pub fn camera_pose(&self, offset: Vector3<f64>) -> CameraPose {
        ChaseCamera::new(offset).pose_for(&self.state)
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn tuning(&self) -> &FlightTuning {
        &self.tuning
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Back to the initial pose, clock cleared.
    pub fn reset(&mut self) {
        info!("Resetting simulator after {} ticks", self.tick_count);
        self.state = AircraftState::at_start(&self.tuning);
        self.previous = self.state.pose();
        self.accumulator = 0.0;
        self.tick_count = 0;
    }
}

impl Default for FlightSimulator {
    fn default() -> Self {
        Self::new(FlightTuning::default(), PhysicsConfig::default())
    }
}
