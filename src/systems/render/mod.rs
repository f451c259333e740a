mod aircraft;

pub use aircraft::{aircraft_transform_system, to_render_quat, to_render_vec3};
