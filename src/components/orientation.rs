use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{Vec3, VectorExt};

/// Body axis pointing out of the nose.
pub fn body_forward() -> Vec3 {
    Vector3::new(0.0, 0.0, 1.0)
}

/// Body axis pointing out of the canopy.
pub fn body_up() -> Vec3 {
    Vector3::new(0.0, 1.0, 0.0)
}

/// Rotate a body axis into the world frame: roll about Z, then pitch about X,
/// then yaw about Y. Rotations do not commute, keep this order.
fn body_to_world(axis: Vec3, yaw: f64, pitch: f64, roll: f64) -> Vec3 {
    axis
        .rotate_around_z(roll)
        .rotate_around_x(pitch)
        .rotate_around_y(yaw)
        .normalize_or_zero()
}

/// World-frame unit vector of the nose direction.
pub fn forward_vector(yaw: f64, pitch: f64, roll: f64) -> Vec3 {
    body_to_world(body_forward(), yaw, pitch, roll)
}

/// World-frame unit vector of the lift direction.
pub fn up_vector(yaw: f64, pitch: f64, roll: f64) -> Vec3 {
    body_to_world(body_up(), yaw, pitch, roll)
}

/// Yaw, pitch and roll in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Attitude {
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    pub fn forward(&self) -> Vec3 {
        forward_vector(self.yaw, self.pitch, self.roll)
    }

    pub fn up(&self) -> Vec3 {
        up_vector(self.yaw, self.pitch, self.roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[track_caller]
    fn assert_vec_eq(actual: Vec3, expected: Vec3) {
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
        assert_relative_eq!(actual.z, expected.z, epsilon = 1e-9);
    }

    #[test]
    fn test_level_attitude_is_body_axes() {
        let attitude = Attitude::default();
        assert_vec_eq(attitude.forward(), body_forward());
        assert_vec_eq(attitude.up(), body_up());
    }

    #[test]
    fn test_yaw_turns_nose_toward_x() {
        assert_vec_eq(forward_vector(FRAC_PI_2, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert_vec_eq(up_vector(FRAC_PI_2, 0.0, 0.0), body_up());
    }

    #[test]
    fn test_pitch_rotates_about_x() {
        let angle = FRAC_PI_4;
        let forward = forward_vector(0.0, angle, 0.0);
        assert_vec_eq(forward, Vector3::new(0.0, -angle.sin(), angle.cos()));

        let up = up_vector(0.0, angle, 0.0);
        assert_vec_eq(up, Vector3::new(0.0, angle.cos(), angle.sin()));
    }

    #[test]
    fn test_roll_tilts_up_vector_only() {
        let angle = 0.3;
        assert_vec_eq(forward_vector(0.0, 0.0, angle), body_forward());
        assert_vec_eq(up_vector(0.0, 0.0, angle), Vector3::new(-angle.sin(), angle.cos(), 0.0));
    }

    #[test]
    fn test_rotation_order_is_roll_pitch_yaw() {
        let (yaw, pitch, roll) = (0.7, -0.4, 1.1);
        let expected = body_up()
            .rotate_around_z(roll)
            .rotate_around_x(pitch)
            .rotate_around_y(yaw);
        assert_vec_eq(up_vector(yaw, pitch, roll), expected);

        // Applying the same angles in a different order lands elsewhere.
        let reordered = body_up()
            .rotate_around_y(yaw)
            .rotate_around_x(pitch)
            .rotate_around_z(roll);
        assert!((up_vector(yaw, pitch, roll) - reordered).norm() > 1e-3);
    }

    #[test]
    fn test_axes_stay_orthonormal() {
        for &(yaw, pitch, roll) in &[(0.0, 0.0, 0.0), (PI, 0.5, -1.2), (-7.0, -0.7, 1.3)] {
            let attitude = Attitude::new(yaw, pitch, roll);
            assert_relative_eq!(attitude.forward().norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(attitude.up().norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(attitude.forward().dot(&attitude.up()), 0.0, epsilon = 1e-12);
        }
    }
}
