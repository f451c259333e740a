use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::aircraft::Pose;
use crate::resources::FlightTuning;

/// Discrete flight phase selecting which force model applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightMode {
    #[default]
    Grounded,
    Airborne,
}

/// Kinematic state of the aircraft, mutated in place once per tick.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position in world space (y is altitude).
    pub position: Vector3<f64>,
    /// Velocity in world units per tick.
    pub velocity: Vector3<f64>,
    /// Pitch angle (rad), positive nose up. Not wrapped.
    pub pitch: f64,
    /// Heading angle (rad). Not wrapped.
    pub yaw: f64,
    /// Bank angle (rad). Not wrapped.
    pub roll: f64,
    /// Orientation produced at the end of the last tick. Drives the thrust axis.
    pub attitude: UnitQuaternion<f64>,
    thrust: f64,
    // Written only by the transition methods in `mode.rs`.
    pub(super) mode: FlightMode,
}

impl AircraftState {
    /// The fixed initial pose: on the ground, at rest, throttle closed.
    pub fn at_start(tuning: &FlightTuning) -> Self {
        let mut position = tuning.start_position;
        position.y = tuning.ground_height;

        Self {
            position,
            velocity: Vector3::zeros(),
            pitch: 0.0,
            yaw: tuning.start_yaw,
            roll: 0.0,
            attitude: compose_attitude(0.0, tuning.start_yaw, 0.0),
            thrust: 0.0,
            mode: FlightMode::Grounded,
        }
    }

    /// An in-flight state with level attitude and the throttle closed.
    pub fn airborne(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            position,
            velocity,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            attitude: UnitQuaternion::identity(),
            thrust: 0.0,
            mode: FlightMode::Airborne,
        }
    }

    pub fn mode(&self) -> FlightMode {
        self.mode
    }

    pub fn is_grounded(&self) -> bool {
        self.mode == FlightMode::Grounded
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Magnitude of the velocity projected onto the ground plane.
    pub fn horizontal_speed(&self) -> f64 {
        (self.velocity.x * self.velocity.x + self.velocity.z * self.velocity.z).sqrt()
    }

    pub fn thrust(&self) -> f64 {
        self.thrust
    }

    /// Sets the thrust, clamped to `[0, max_thrust]`.
    pub fn set_thrust(&mut self, thrust: f64, max_thrust: f64) {
        self.thrust = thrust.clamp(0.0, max_thrust);
    }

    /// Orientation built directly from the current pitch, yaw and roll.
    pub fn composed_attitude(&self) -> UnitQuaternion<f64> {
        compose_attitude(self.pitch, self.yaw, self.roll)
    }

    /// Unit nose direction (local -Z) under the stored attitude.
    ///
    /// Returns zero rather than a non-finite vector if the attitude has degenerated.
    pub fn forward_axis(&self) -> Vector3<f64> {
        let axis = self.attitude * -Vector3::z();
        if axis.iter().any(|v| !v.is_finite()) {
            return Vector3::zeros();
        }
        axis.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros)
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            attitude: self.attitude,
        }
    }
}

/// Composes pitch (x), yaw (y) and roll (z) in XYZ order.
pub fn compose_attitude(pitch: f64, yaw: f64, roll: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch)
        * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), roll)
}
