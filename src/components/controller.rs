use bevy::prelude::*;

use crate::components::ControlIntent;

/// Marks the aircraft driven by local input.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    pub fn disabled() -> Self {
        Self { active: false }
    }

    pub fn enable(&mut self) {
        self.active = true;
    }

    pub fn disable(&mut self) {
        self.active = false;
    }
}

/// Keyboard mapping for the control intents. Several keys may map to one intent.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub bindings: Vec<(KeyCode, ControlIntent)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::ArrowUp, ControlIntent::ThrottleUp),
                (KeyCode::ArrowDown, ControlIntent::ThrottleDown),
                (KeyCode::KeyW, ControlIntent::PitchUp),
                (KeyCode::KeyS, ControlIntent::PitchDown),
                (KeyCode::KeyA, ControlIntent::RollLeft),
                (KeyCode::KeyD, ControlIntent::RollRight),
                (KeyCode::KeyQ, ControlIntent::YawLeft),
                (KeyCode::KeyE, ControlIntent::YawRight),
            ],
        }
    }
}

impl KeyBindings {
    pub fn bind(mut self, key: KeyCode, intent: ControlIntent) -> Self {
        self.bindings.push((key, intent));
        self
    }

    pub fn keys_for(&self, intent: ControlIntent) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| *bound == intent)
            .map(|(key, _)| *key)
    }
}
