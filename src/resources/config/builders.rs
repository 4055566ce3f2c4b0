use nalgebra::Vector3;
use serde_json::Value;

use super::{
    ControlConfig, CourseConfig, FlightLimits, PhysicsConfig, SimulationConfig, StartConfig,
};
use crate::utils::ConfigError;

fn f64_field(value: &Value, key: &str) -> Result<Option<f64>, ConfigError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| ConfigError::invalid(key, v)),
    }
}

fn u64_field(value: &Value, key: &str) -> Result<Option<u64>, ConfigError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .map(Some)
            .ok_or_else(|| ConfigError::invalid(key, v)),
    }
}

fn pair_field(value: &Value, key: &str) -> Result<Option<(f64, f64)>, ConfigError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => match v.as_array().map(|a| a.as_slice()) {
            Some([a, b]) => match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => Ok(Some((a, b))),
                _ => Err(ConfigError::invalid(key, v)),
            },
            _ => Err(ConfigError::invalid(key, v)),
        },
    }
}

fn vector_field(value: &Value, key: &str) -> Result<Option<Vector3<f64>>, ConfigError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => match v.as_array().map(|a| a.as_slice()) {
            Some([x, y, z]) => match (x.as_f64(), y.as_f64(), z.as_f64()) {
                (Some(x), Some(y), Some(z)) => Ok(Some(Vector3::new(x, y, z))),
                _ => Err(ConfigError::invalid(key, v)),
            },
            _ => Err(ConfigError::invalid(key, v)),
        },
    }
}

#[derive(Default, Debug, Clone)]
pub struct PhysicsConfigBuilder {
    pub mass: Option<f64>,
    pub thrust_power: Option<f64>,
    pub drag_coefficient: Option<f64>,
    pub lift_coefficient: Option<f64>,
    pub gravity: Option<f64>,
    pub fuel_burn_rate: Option<f64>,
    pub roll_yaw_coupling: Option<f64>,
    pub bounce_damping: Option<f64>,
    pub time_step: Option<f64>,
}

impl PhysicsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn thrust_power(mut self, thrust: f64) -> Self {
        self.thrust_power = Some(thrust);
        self
    }

    pub fn time_step(mut self, dt: f64) -> Self {
        self.time_step = Some(dt);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        Ok(Self {
            mass: f64_field(value, "mass")?,
            thrust_power: f64_field(value, "thrust_power")?,
            drag_coefficient: f64_field(value, "drag_coefficient")?,
            lift_coefficient: f64_field(value, "lift_coefficient")?,
            gravity: f64_field(value, "gravity")?,
            fuel_burn_rate: f64_field(value, "fuel_burn_rate")?,
            roll_yaw_coupling: f64_field(value, "roll_yaw_coupling")?,
            bounce_damping: f64_field(value, "bounce_damping")?,
            time_step: f64_field(value, "time_step")?,
        })
    }

    pub fn build(self) -> PhysicsConfig {
        let defaults = PhysicsConfig::default();
        PhysicsConfig {
            mass: self.mass.unwrap_or(defaults.mass),
            thrust_power: self.thrust_power.unwrap_or(defaults.thrust_power),
            drag_coefficient: self.drag_coefficient.unwrap_or(defaults.drag_coefficient),
            lift_coefficient: self.lift_coefficient.unwrap_or(defaults.lift_coefficient),
            gravity: self.gravity.unwrap_or(defaults.gravity),
            fuel_burn_rate: self.fuel_burn_rate.unwrap_or(defaults.fuel_burn_rate),
            roll_yaw_coupling: self.roll_yaw_coupling.unwrap_or(defaults.roll_yaw_coupling),
            bounce_damping: self.bounce_damping.unwrap_or(defaults.bounce_damping),
            time_step: self.time_step.unwrap_or(defaults.time_step),
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct CourseConfigBuilder {
    pub ring_count: Option<usize>,
    pub spacing: Option<f64>,
    pub lateral_range: Option<(f64, f64)>,
    pub altitude_range: Option<(f64, f64)>,
    pub ring_radius: Option<f64>,
    pub score_per_ring: Option<u32>,
    pub seed: Option<u64>,
}

impl CourseConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ring_count(mut self, count: usize) -> Self {
        self.ring_count = Some(count);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let ring_count = u64_field(value, "ring_count")?
            .map(|n| usize::try_from(n).map_err(|_| ConfigError::invalid("ring_count", n)))
            .transpose()?;
        let score_per_ring = u64_field(value, "score_per_ring")?
            .map(|n| u32::try_from(n).map_err(|_| ConfigError::invalid("score_per_ring", n)))
            .transpose()?;

        Ok(Self {
            ring_count,
            spacing: f64_field(value, "spacing")?,
            lateral_range: pair_field(value, "lateral_range")?,
            altitude_range: pair_field(value, "altitude_range")?,
            ring_radius: f64_field(value, "ring_radius")?,
            score_per_ring,
            seed: u64_field(value, "seed")?,
        })
    }

    pub fn build(self) -> CourseConfig {
        let defaults = CourseConfig::default();
        CourseConfig {
            ring_count: self.ring_count.unwrap_or(defaults.ring_count),
            spacing: self.spacing.unwrap_or(defaults.spacing),
            lateral_range: self.lateral_range.unwrap_or(defaults.lateral_range),
            altitude_range: self.altitude_range.unwrap_or(defaults.altitude_range),
            ring_radius: self.ring_radius.unwrap_or(defaults.ring_radius),
            score_per_ring: self.score_per_ring.unwrap_or(defaults.score_per_ring),
            seed: self.seed.or(defaults.seed),
        }
    }
}

/// Assembles a [`SimulationConfig`] from partial overrides. Anything not set
/// keeps its canonical default.
#[derive(Default, Debug, Clone)]
pub struct SimulationConfigBuilder {
    pub physics: PhysicsConfigBuilder,
    pub course: CourseConfigBuilder,
    pub limits: Option<FlightLimits>,
    pub start: Option<StartConfig>,
    pub controls: Option<ControlConfig>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn physics(mut self, physics: PhysicsConfigBuilder) -> Self {
        self.physics = physics;
        self
    }

    pub fn course(mut self, course: CourseConfigBuilder) -> Self {
        self.course = course;
        self
    }

    pub fn start(mut self, start: StartConfig) -> Self {
        self.start = Some(start);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let mut builder = Self::new();

        if let Some(physics) = value.get("physics") {
            builder.physics = PhysicsConfigBuilder::from_json(physics)?;
        }

        if let Some(course) = value.get("course") {
            builder.course = CourseConfigBuilder::from_json(course)?;
        }

        if let Some(limits) = value.get("limits") {
            let mut config = FlightLimits::default();
            if let Some(pitch) = f64_field(limits, "max_pitch_deg")? {
                config.max_pitch_deg = pitch;
            }
            if let Some(roll) = f64_field(limits, "max_roll_deg")? {
                config.max_roll_deg = roll;
            }
            builder.limits = Some(config);
        }

        if let Some(start) = value.get("start") {
            let mut config = StartConfig::default();
            if let Some(position) = vector_field(start, "position")? {
                config.position = position;
            }
            if let Some(velocity) = vector_field(start, "velocity")? {
                config.velocity = velocity;
            }
            if let Some(throttle) = f64_field(start, "throttle")? {
                config.throttle = throttle;
            }
            if let Some(fuel) = f64_field(start, "fuel")? {
                config.fuel = fuel;
            }
            builder.start = Some(config);
        }

        if let Some(controls) = value.get("controls") {
            let mut config = ControlConfig::default();
            if let Some(step) = f64_field(controls, "throttle_step")? {
                config.throttle_step = step;
            }
            if let Some(step) = f64_field(controls, "pitch_step_deg")? {
                config.pitch_step_deg = step;
            }
            if let Some(step) = f64_field(controls, "yaw_step_deg")? {
                config.yaw_step_deg = step;
            }
            if let Some(step) = f64_field(controls, "roll_step_deg")? {
                config.roll_step_deg = step;
            }
            builder.controls = Some(config);
        }

        Ok(builder)
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig {
            physics: self.physics.build(),
            limits: self.limits.unwrap_or_default(),
            start: self.start.unwrap_or_default(),
            course: self.course.build(),
            controls: self.controls.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
