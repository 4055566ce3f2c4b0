use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::orientation::{forward_vector, up_vector, Attitude};
use crate::resources::StartConfig;
use crate::utils::Vec3;

/// Mutable state of the aircraft, advanced once per tick by the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Position in world space [m], Y up
    pub position: Vector3<f64>,
    /// Velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Heading [rad], unbounded
    pub yaw: f64,
    /// [rad], clamped by the flight limits
    pub pitch: f64,
    /// [rad], clamped by the flight limits
    pub roll: f64,
    /// Engine setting in [0, 1]
    pub throttle: f64,
    /// Remaining fuel, never negative
    pub fuel: f64,
    pub score: u32,
}

impl Default for FlightState {
    fn default() -> Self {
        Self::from_start(&StartConfig::default())
    }
}

impl FlightState {
    pub fn from_start(start: &StartConfig) -> Self {
        Self {
            position: start.position,
            velocity: start.velocity,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            throttle: start.throttle,
            fuel: start.fuel,
            score: 0,
        }
    }

    pub fn attitude(&self) -> Attitude {
        Attitude::new(self.yaw, self.pitch, self.roll)
    }

    pub fn forward(&self) -> Vec3 {
        forward_vector(self.yaw, self.pitch, self.roll)
    }

    pub fn up(&self) -> Vec3 {
        up_vector(self.yaw, self.pitch, self.roll)
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn out_of_fuel(&self) -> bool {
        self.fuel <= 0.0
    }
}
