pub mod controls;
pub mod flight;
pub mod orientation;
pub mod ring;

pub use controls::{ControlAxis, ControlInput};
pub use flight::FlightState;
pub use orientation::{forward_vector, up_vector, Attitude};
pub use ring::{generate_rings, Ring};
