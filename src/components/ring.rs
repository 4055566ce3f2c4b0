use bevy::log::{info, warn};
use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::resources::CourseConfig;
use crate::utils::Vec3;

/// Scoring target. `passed` only ever goes from false to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub position: Vector3<f64>,
    pub radius: f64,
    pub passed: bool,
}

impl Ring {
    pub fn new(position: Vector3<f64>, radius: f64) -> Self {
        Self {
            position,
            radius,
            passed: false,
        }
    }

    /// True when `point` lies within the ring's radius of its centre.
    pub fn contains(&self, point: &Vec3) -> bool {
        (point - self.position).norm() <= self.radius
    }
}

fn ordered_range(name: &str, (min, max): (f64, f64)) -> (f64, f64) {
    if min > max {
        warn!(
            "Invalid {} range: min ({}) > max ({}). Swapping values.",
            name, min, max
        );
        (max, min)
    } else {
        (min, max)
    }
}

/// Lay out `ring_count` rings at increasing distance along +Z, each with a
/// random lateral offset and altitude.
pub fn generate_rings<R: Rng>(config: &CourseConfig, rng: &mut R) -> Vec<Ring> {
    let (lateral_min, lateral_max) = ordered_range("lateral", config.lateral_range);
    let (altitude_min, altitude_max) = ordered_range("altitude", config.altitude_range);

    let rings: Vec<Ring> = (0..config.ring_count)
        .map(|i| {
            let x = rng.gen_range(lateral_min..=lateral_max);
            let y = rng.gen_range(altitude_min..=altitude_max);
            let z = config.spacing * (i + 1) as f64;
            Ring::new(Vector3::new(x, y, z), config.ring_radius)
        })
        .collect();

    info!("Generated ring course with {} rings", rings.len());
    rings
}
