use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{AircraftState, PreviousPose, RenderPose};

/// Writes the aircraft `Transform` for this frame.
///
/// The pose is blended between the previous and current tick by how far the
/// fixed clock has run past the last tick, so motion stays smooth when the
/// frame rate and tick rate differ.
pub fn aircraft_transform_system(
    mut query: Query<(
        &AircraftState,
        &PreviousPose,
        &mut RenderPose,
        &mut Transform,
    )>,
    fixed_time: Res<Time<Fixed>>,
) {
    let alpha = fixed_time.overstep_fraction_f64();

    for (state, previous, mut render_pose, mut transform) in query.iter_mut() {
        let pose = previous.0.interpolate(&state.pose(), alpha);
        transform.translation = to_render_vec3(&pose.position);
        transform.rotation = to_render_quat(&pose.attitude);
        render_pose.0 = pose;
    }
}

/// World axes match the render frame (y up, -z forward); only precision changes.
pub fn to_render_vec3(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

pub fn to_render_quat(q: &UnitQuaternion<f64>) -> Quat {
    let q = q.quaternion();
    Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32).normalize()
}
