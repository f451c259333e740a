mod camera;
mod input;
mod physics;
mod render;

pub use camera::ChaseCameraPlugin;
pub use input::KeyboardControlPlugin;
pub use physics::{FlightDynamicsPlugin, FlightSet};
pub use render::{PresentationSet, PresentationSyncPlugin};
