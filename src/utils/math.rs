use nalgebra::Vector3;
use std::f64::consts::PI;

/// World-space vector used throughout the simulation.
pub type Vec3 = Vector3<f64>;

/// Vectors shorter than this normalise to zero instead of dividing by ~0.
pub const NORMALIZE_EPSILON: f64 = 1e-6;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap an angle in degrees into [0, 360). Display only, the physics state keeps raw angles.
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Operations the flight model needs on top of nalgebra's vector arithmetic.
pub trait VectorExt {
    /// Unit vector in the same direction, or the zero vector when the length
    /// is below [`NORMALIZE_EPSILON`].
    fn normalize_or_zero(&self) -> Self;

    fn rotate_around_x(&self, radians: f64) -> Self;
    fn rotate_around_y(&self, radians: f64) -> Self;
    fn rotate_around_z(&self, radians: f64) -> Self;
}

impl VectorExt for Vec3 {
    fn normalize_or_zero(&self) -> Self {
        let len = self.norm();
        if len < NORMALIZE_EPSILON {
            return Vector3::zeros();
        }
        self / len
    }

    fn rotate_around_x(&self, radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Vector3::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    fn rotate_around_y(&self, radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Vector3::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }

    fn rotate_around_z(&self, radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Vector3::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z)
    }
}
