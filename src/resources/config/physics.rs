use serde::{Deserialize, Serialize};

use crate::utils::{
    BOUNCE_DAMPING, DRAG_COEFFICIENT, FUEL_BURN_PER_SEC, GRAVITY, LIFT_COEFFICIENT, MASS,
    ROLL_YAW_COUPLING, THRUST_POWER, TIME_STEP,
};

/// Fixed constants of the simplified force model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Airframe mass [kg]
    pub mass: f64,
    /// Thrust at full throttle [N]
    pub thrust_power: f64,
    /// Drag force per (m/s)^2
    pub drag_coefficient: f64,
    /// Lift force per (m/s)^2 along the body up axis
    pub lift_coefficient: f64,
    /// Gravitational acceleration [m/s^2]
    pub gravity: f64,
    /// Fuel units per second at full throttle
    pub fuel_burn_rate: f64,
    /// Yaw rate per radian of roll [1/s]
    pub roll_yaw_coupling: f64,
    /// Factor applied to a negative vertical velocity on ground contact
    pub bounce_damping: f64,
    /// Fixed tick length [s]
    pub time_step: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            mass: MASS,
            thrust_power: THRUST_POWER,
            drag_coefficient: DRAG_COEFFICIENT,
            lift_coefficient: LIFT_COEFFICIENT,
            gravity: GRAVITY,
            fuel_burn_rate: FUEL_BURN_PER_SEC,
            roll_yaw_coupling: ROLL_YAW_COUPLING,
            bounce_damping: BOUNCE_DAMPING,
            time_step: TIME_STEP,
        }
    }
}
