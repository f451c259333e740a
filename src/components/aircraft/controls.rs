use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A named control the operator can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlIntent {
    ThrottleUp,
    ThrottleDown,
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    YawLeft,
    YawRight,
}

impl ControlIntent {
    pub const ALL: [ControlIntent; 8] = [
        ControlIntent::ThrottleUp,
        ControlIntent::ThrottleDown,
        ControlIntent::PitchUp,
        ControlIntent::PitchDown,
        ControlIntent::RollLeft,
        ControlIntent::RollRight,
        ControlIntent::YawLeft,
        ControlIntent::YawRight,
    ];
}

/// Snapshot of which controls are held for one tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlInputs {
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
}

impl ControlInputs {
    /// No controls held.
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn from_intents<I>(intents: I) -> Self
    where
        I: IntoIterator<Item = ControlIntent>,
    {
        intents
            .into_iter()
            .fold(Self::default(), |inputs, intent| inputs.with(intent))
    }

    /// Returns a copy with `intent` held.
    pub fn with(mut self, intent: ControlIntent) -> Self {
        self.set(intent, true);
        self
    }

    pub fn set(&mut self, intent: ControlIntent, held: bool) {
        *self.slot_mut(intent) = held;
    }

    pub fn is_held(&self, intent: ControlIntent) -> bool {
        match intent {
            ControlIntent::ThrottleUp => self.throttle_up,
            ControlIntent::ThrottleDown => self.throttle_down,
            ControlIntent::PitchUp => self.pitch_up,
            ControlIntent::PitchDown => self.pitch_down,
            ControlIntent::RollLeft => self.roll_left,
            ControlIntent::RollRight => self.roll_right,
            ControlIntent::YawLeft => self.yaw_left,
            ControlIntent::YawRight => self.yaw_right,
        }
    }

    pub fn held(&self) -> impl Iterator<Item = ControlIntent> + '_ {
        ControlIntent::ALL
            .into_iter()
            .filter(move |intent| self.is_held(*intent))
    }

    pub fn any_pitch(&self) -> bool {
        self.pitch_up || self.pitch_down
    }

    pub fn any_roll(&self) -> bool {
        self.roll_left || self.roll_right
    }

    fn slot_mut(&mut self, intent: ControlIntent) -> &mut bool {
        match intent {
            ControlIntent::ThrottleUp => &mut self.throttle_up,
            ControlIntent::ThrottleDown => &mut self.throttle_down,
            ControlIntent::PitchUp => &mut self.pitch_up,
            ControlIntent::PitchDown => &mut self.pitch_down,
            ControlIntent::RollLeft => &mut self.roll_left,
            ControlIntent::RollRight => &mut self.roll_right,
            ControlIntent::YawLeft => &mut self.yaw_left,
            ControlIntent::YawRight => &mut self.yaw_right,
        }
    }
}
