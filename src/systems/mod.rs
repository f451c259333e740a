pub mod camera;
pub mod controller;
pub mod flight;
pub mod render;

pub use camera::chase_camera_system;
pub use controller::{keyboard_control_system, read_controls};
pub use flight::{
    apply_throttle, flight_dynamics_system, flight_readout_system, step_aircraft, AirData,
    TickReport, TickSample,
};
pub use render::{aircraft_transform_system, to_render_quat, to_render_vec3};
