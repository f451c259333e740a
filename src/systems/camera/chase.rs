use bevy::prelude::*;

use crate::components::{AircraftState, ChaseCamera, PlayerController, RenderPose};
use crate::systems::render::to_render_vec3;

/// Places chase cameras behind the player's aircraft, looking at it.
pub fn chase_camera_system(
    mut camera_query: Query<(&ChaseCamera, &mut Transform), Without<AircraftState>>,
    target_query: Query<(&AircraftState, Option<&RenderPose>), With<PlayerController>>,
) {
    let Ok((state, render_pose)) = target_query.get_single() else {
        return;
    };

    // Follow the interpolated pose when there is one so the camera does not jitter.
    let pose = render_pose.map(|p| p.0).unwrap_or_else(|| state.pose());

    for (camera, mut transform) in camera_query.iter_mut() {
        let placement = camera.place(&pose);
        *transform = Transform::from_translation(to_render_vec3(&placement.eye))
            .looking_at(to_render_vec3(&placement.target), Vec3::Y);
    }
}
