pub mod config;
mod pending;

pub use config::{
    ControlConfig, CourseConfig, CourseConfigBuilder, FlightLimits, PhysicsConfig,
    PhysicsConfigBuilder, SimulationConfig, SimulationConfigBuilder, StartConfig,
};
pub use pending::PendingControls;
