use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{
    deg_to_rad, MAX_PITCH_DEG, MAX_ROLL_DEG, START_ALTITUDE, START_FUEL, START_SPEED,
    START_THROTTLE,
};

/// Symmetric attitude limits, in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightLimits {
    pub max_pitch_deg: f64,
    pub max_roll_deg: f64,
}

impl Default for FlightLimits {
    fn default() -> Self {
        Self {
            max_pitch_deg: MAX_PITCH_DEG,
            max_roll_deg: MAX_ROLL_DEG,
        }
    }
}

impl FlightLimits {
    pub fn max_pitch(&self) -> f64 {
        deg_to_rad(self.max_pitch_deg)
    }

    pub fn max_roll(&self) -> f64 {
        deg_to_rad(self.max_roll_deg)
    }
}

/// Initial conditions of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// World position [m]
    pub position: Vector3<f64>,
    /// World velocity [m/s]
    pub velocity: Vector3<f64>,
    pub throttle: f64,
    pub fuel: f64,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, START_ALTITUDE, 0.0),
            velocity: Vector3::new(0.0, 0.0, START_SPEED),
            throttle: START_THROTTLE,
            fuel: START_FUEL,
        }
    }
}
