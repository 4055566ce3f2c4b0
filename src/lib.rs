pub mod components;
pub mod input;
pub mod plugins;
pub mod rendering;
pub mod resources;
pub mod session;
pub mod sim;
pub mod systems;
pub mod utils;

pub use components::{ControlInput, FlightState, Ring};
pub use resources::SimulationConfig;
pub use sim::{Simulator, StepReport};
