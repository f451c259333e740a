use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::{AircraftState, FlightMode};
use crate::resources::FlightTuning;

/// Minimum accumulated pitch (rad) before the wheels can leave the runway.
const TAKEOFF_PITCH: f64 = 0.1;

/// Takeoff lift must exceed this multiple of gravity.
const TAKEOFF_LIFT_FACTOR: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeTransition {
    Takeoff,
    Landing,
}

/// Inputs to the takeoff decision, gathered by the ground model during its update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TakeoffCheck {
    pub pitch_up_held: bool,
    /// Speed sampled at the start of the tick.
    pub speed: f64,
    /// Instantaneous takeoff lift generated this tick.
    pub lift: f64,
}

impl AircraftState {
    /// Grounded to Airborne.
    ///
    /// Requires pitch-up held above `min_speed`, with pitch past the rotation
    /// threshold and takeoff lift above twice gravity in the same tick.
    pub fn evaluate_takeoff(
        &mut self,
        check: TakeoffCheck,
        tuning: &FlightTuning,
    ) -> Option<ModeTransition> {
        if self.mode != FlightMode::Grounded
            || !check.pitch_up_held
            || check.speed <= tuning.min_speed
        {
            return None;
        }

        if self.pitch > TAKEOFF_PITCH && check.lift > TAKEOFF_LIFT_FACTOR * tuning.gravity {
            self.mode = FlightMode::Airborne;
            info!(
                "Takeoff: speed {:.4}, pitch {:.4}, lift {:.6}",
                check.speed, self.pitch, check.lift
            );
            return Some(ModeTransition::Takeoff);
        }

        None
    }

    /// Airborne to Grounded, once the integrated position has dropped below the ground.
    ///
    /// Pins the aircraft to the ground, halves horizontal velocity, kills vertical
    /// velocity and levels pitch and roll. Heading is kept.
    pub fn evaluate_ground_contact(&mut self, tuning: &FlightTuning) -> Option<ModeTransition> {
        if self.mode != FlightMode::Airborne || self.position.y >= tuning.ground_height {
            return None;
        }

        let touchdown_speed = self.speed();
        let sink_rate = -self.velocity.y;

        self.mode = FlightMode::Grounded;
        self.position.y = tuning.ground_height;
        self.velocity.x *= 0.5;
        self.velocity.y = 0.0;
        self.velocity.z *= 0.5;
        self.pitch = 0.0;
        self.roll = 0.0;

        info!(
            "Landing: touchdown speed {:.4}, sink rate {:.4}, heading {:.4}",
            touchdown_speed, sink_rate, self.yaw
        );
        Some(ModeTransition::Landing)
    }
}
