mod controls;
mod mode;
mod pose;
mod readout;
mod state;

pub use controls::{ControlInputs, ControlIntent};
pub use mode::{ModeTransition, TakeoffCheck};
pub use pose::{Pose, PreviousPose, RenderPose};
pub use readout::FlightReadout;
pub use state::{compose_attitude, AircraftState, FlightMode};
