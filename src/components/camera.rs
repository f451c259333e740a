use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{AircraftState, Pose};

/// Chase camera rigidly attached behind the aircraft.
///
/// Attach to any entity with a `Transform`; it is placed at
/// `position + attitude * offset` and aimed at the aircraft.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaseCamera {
    /// Offset in the aircraft's body frame.
    pub offset: Vector3<f64>,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            offset: Vector3::new(0.0, 2.0, 10.0),
        }
    }
}

/// Derived camera placement. Not part of the simulated state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub eye: Vector3<f64>,
    pub target: Vector3<f64>,
}

impl ChaseCamera {
    pub fn new(offset: Vector3<f64>) -> Self {
        Self { offset }
    }

    pub fn pose_for(&self, state: &AircraftState) -> CameraPose {
        self.place(&state.pose())
    }

    /// Camera placement relative to an arbitrary aircraft pose.
    pub fn place(&self, pose: &Pose) -> CameraPose {
        CameraPose {
            eye: pose.position + pose.attitude * self.offset,
            target: pose.position,
        }
    }
}
