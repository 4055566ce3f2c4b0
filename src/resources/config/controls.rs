use serde::{Deserialize, Serialize};

use crate::utils::{PITCH_STEP_DEG, ROLL_STEP_DEG, THROTTLE_STEP, YAW_STEP_DEG};

/// Size of one control command, for both typed tokens and held keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub throttle_step: f64,
    pub pitch_step_deg: f64,
    pub yaw_step_deg: f64,
    pub roll_step_deg: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            throttle_step: THROTTLE_STEP,
            pitch_step_deg: PITCH_STEP_DEG,
            yaw_step_deg: YAW_STEP_DEG,
            roll_step_deg: ROLL_STEP_DEG,
        }
    }
}
