mod controller;
mod flight;
pub mod physics;
mod rings;

pub use controller::keyboard_control_system;
pub use flight::flight_step_system;
pub use physics::{apply_controls, clamp_to_ground, integrate};
pub use rings::check_ring_passage;
