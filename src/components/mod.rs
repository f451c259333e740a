pub mod aircraft;
pub mod camera;
mod controller;

pub use aircraft::{
    compose_attitude, AircraftState, ControlInputs, ControlIntent, FlightMode, FlightReadout,
    ModeTransition, Pose, PreviousPose, RenderPose, TakeoffCheck,
};
pub use camera::{CameraPose, ChaseCamera};
pub use controller::{KeyBindings, PlayerController};
