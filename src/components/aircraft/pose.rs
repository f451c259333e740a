use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Placement of the aircraft for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in world space.
    pub position: Vector3<f64>,
    /// Rotation from body to world frame.
    pub attitude: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
        }
    }
}

impl Pose {
    /// Blends towards `next` by `alpha` in `[0, 1]`: lerp for position, slerp for attitude.
    pub fn interpolate(&self, next: &Pose, alpha: f64) -> Pose {
        let alpha = alpha.clamp(0.0, 1.0);
        let attitude = self
            .attitude
            .try_slerp(&next.attitude, alpha, 1.0e-9)
            .unwrap_or(next.attitude);

        Pose {
            position: self.position.lerp(&next.position, alpha),
            attitude,
        }
    }
}

/// Pose at the end of the previous tick, kept for render interpolation.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PreviousPose(pub Pose);

/// Pose blended between the last two ticks for the current frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderPose(pub Pose);
