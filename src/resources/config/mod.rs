pub mod builders;
pub mod controls;
pub mod course;
pub mod flight;
pub mod physics;
pub mod simulation;

pub use builders::{CourseConfigBuilder, PhysicsConfigBuilder, SimulationConfigBuilder};
pub use controls::ControlConfig;
pub use course::CourseConfig;
pub use flight::{FlightLimits, StartConfig};
pub use physics::PhysicsConfig;
pub use simulation::SimulationConfig;
