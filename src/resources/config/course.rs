use serde::{Deserialize, Serialize};

use crate::utils::{
    RING_ALTITUDE_RANGE, RING_COUNT, RING_LATERAL_RANGE, RING_RADIUS, RING_SPACING,
    SCORE_PER_RING,
};

/// Layout of the ring course generated at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    pub ring_count: usize,
    /// Distance along +Z between consecutive rings [m]
    pub spacing: f64,
    /// Range for the ring centre's X coordinate [m]
    pub lateral_range: (f64, f64),
    /// Range for the ring centre's Y coordinate [m]
    pub altitude_range: (f64, f64),
    pub ring_radius: f64,
    pub score_per_ring: u32,
    /// Seed for the course layout. `None` lets the driver pick one.
    pub seed: Option<u64>,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            ring_count: RING_COUNT,
            spacing: RING_SPACING,
            lateral_range: RING_LATERAL_RANGE,
            altitude_range: RING_ALTITUDE_RANGE,
            ring_radius: RING_RADIUS,
            score_per_ring: SCORE_PER_RING,
            seed: None,
        }
    }
}
