use bevy::prelude::*;

use crate::components::{ControlInputs, ControlIntent, KeyBindings, PlayerController};

/// Polls the keyboard into the player's control snapshot.
///
/// The snapshot holds until the next poll, so every fixed tick run in
/// between sees the same controls.
pub fn keyboard_control_system(
    mut query: Query<(&mut ControlInputs, &PlayerController)>,
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
) {
    for (mut controls, player) in query.iter_mut() {
        let snapshot = if player.active {
            read_controls(&keyboard, &bindings)
        } else {
            ControlInputs::neutral()
        };
        if *controls != snapshot {
            debug!("Controls held: {:?}", snapshot.held().collect::<Vec<_>>());
            *controls = snapshot;
        }
    }
}

/// Builds a snapshot of every intent with at least one bound key pressed.
pub fn read_controls(keyboard: &ButtonInput<KeyCode>, bindings: &KeyBindings) -> ControlInputs {
    ControlInputs::from_intents(
        ControlIntent::ALL
            .into_iter()
            .filter(|intent| keyboard.any_pressed(bindings.keys_for(*intent))),
    )
}
