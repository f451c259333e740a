use bevy::prelude::*;

use crate::systems::aircraft_transform_system;

/// Frame-rate stages feeding the presentation layer.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PresentationSet {
    Aircraft,
    Camera,
}

/// Hands the simulated pose to the renderer through the aircraft `Transform`.
pub struct PresentationSyncPlugin;

impl Plugin for PresentationSyncPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PresentationSet::Aircraft, PresentationSet::Camera).chain(),
        )
        .add_systems(
            Update,
            aircraft_transform_system.in_set(PresentationSet::Aircraft),
        );
    }
}
