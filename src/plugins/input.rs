use bevy::input::InputSystem;
use bevy::prelude::*;

use crate::components::KeyBindings;
use crate::systems::keyboard_control_system;

/// Maps held keys onto the player's `ControlInputs`. Needs Bevy's `InputPlugin`.
#[derive(Default)]
pub struct KeyboardControlPlugin {
    pub bindings: KeyBindings,
}

impl Plugin for KeyboardControlPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.bindings.clone())
            .add_systems(PreUpdate, keyboard_control_system.after(InputSystem));
    }
}
