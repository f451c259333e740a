use bevy::prelude::*;

use crate::plugins::PresentationSet;
use crate::systems::chase_camera_system;

/// Drives every entity carrying a `ChaseCamera`. The camera itself is spawned
/// by the presentation layer.
pub struct ChaseCameraPlugin;

impl Plugin for ChaseCameraPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PresentationSet::Aircraft, PresentationSet::Camera).chain(),
        )
        .add_systems(Update, chase_camera_system.in_set(PresentationSet::Camera));
    }
}
