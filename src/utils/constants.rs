// Airframe and engine
pub const MASS: f64 = 750.0; // kg
pub const THRUST_POWER: f64 = 26000.0; // N at full throttle
pub const DRAG_COEFFICIENT: f64 = 0.04; // simplified quadratic drag
pub const LIFT_COEFFICIENT: f64 = 0.018; // scales with speed^2
pub const GRAVITY: f64 = 9.81; // m/s^2
pub const FUEL_BURN_PER_SEC: f64 = 0.25; // fuel units per second at full throttle
pub const ROLL_YAW_COUPLING: f64 = 0.35; // roll adds a slow yawing turn
pub const BOUNCE_DAMPING: f64 = -0.2; // vertical velocity factor on ground contact

pub const TIME_STEP: f64 = 0.1; // s per tick

// Attitude limits (degrees)
pub const MAX_PITCH_DEG: f64 = 45.0;
pub const MAX_ROLL_DEG: f64 = 80.0;

// Start state
pub const START_ALTITUDE: f64 = 80.0; // m
pub const START_SPEED: f64 = 30.0; // m/s along +Z
pub const START_THROTTLE: f64 = 0.4;
pub const START_FUEL: f64 = 120.0;

// Ring course
pub const RING_COUNT: usize = 6;
pub const RING_SPACING: f64 = 320.0; // m between rings along +Z
pub const RING_RADIUS: f64 = 45.0; // m
pub const RING_LATERAL_RANGE: (f64, f64) = (-220.0, 220.0);
pub const RING_ALTITUDE_RANGE: (f64, f64) = (40.0, 220.0);
pub const SCORE_PER_RING: u32 = 100;

// Per-command control steps
pub const THROTTLE_STEP: f64 = 0.04;
pub const PITCH_STEP_DEG: f64 = 0.8;
pub const YAW_STEP_DEG: f64 = 1.2;
pub const ROLL_STEP_DEG: f64 = 1.4;
