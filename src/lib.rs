pub mod components;
pub mod plugins;
pub mod resources;
pub mod simulator;
pub mod systems;

pub use simulator::FlightSimulator;
