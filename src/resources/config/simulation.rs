use super::{
    builders::SimulationConfigBuilder, controls::ControlConfig, course::CourseConfig,
    flight::{FlightLimits, StartConfig},
    physics::PhysicsConfig,
};
use crate::utils::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub limits: FlightLimits,
    pub start: StartConfig,
    pub course: CourseConfig,
    pub controls: ControlConfig,
}

impl SimulationConfig {
    /// Load a config from YAML (`.yaml`/`.yml`) or JSON (`.json`). Keys that
    /// are absent keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let config: Self = match extension.as_str() {
            "yaml" | "yml" => {
                let file = std::fs::File::open(path)?;
                serde_yaml::from_reader(file)?
            }
            "json" => {
                let file = std::fs::File::open(path)?;
                let value: serde_json::Value = serde_json::from_reader(file)?;
                return SimulationConfigBuilder::from_json(&value)?.build();
            }
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        ensure_positive("physics.mass", physics.mass)?;
        ensure_positive("physics.time_step", physics.time_step)?;
        ensure_finite("physics.thrust_power", physics.thrust_power)?;
        ensure_finite("physics.drag_coefficient", physics.drag_coefficient)?;
        ensure_finite("physics.lift_coefficient", physics.lift_coefficient)?;
        ensure_finite("physics.gravity", physics.gravity)?;
        ensure_finite("physics.roll_yaw_coupling", physics.roll_yaw_coupling)?;
        ensure_finite("physics.bounce_damping", physics.bounce_damping)?;
        if !physics.fuel_burn_rate.is_finite() || physics.fuel_burn_rate < 0.0 {
            return Err(ConfigError::invalid(
                "physics.fuel_burn_rate",
                physics.fuel_burn_rate,
            ));
        }

        ensure_positive("limits.max_pitch_deg", self.limits.max_pitch_deg)?;
        ensure_positive("limits.max_roll_deg", self.limits.max_roll_deg)?;

        if !(0.0..=1.0).contains(&self.start.throttle) {
            return Err(ConfigError::invalid("start.throttle", self.start.throttle));
        }
        if !self.start.fuel.is_finite() || self.start.fuel < 0.0 {
            return Err(ConfigError::invalid("start.fuel", self.start.fuel));
        }
        if self.start.position.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::invalid(
                "start.position",
                format!("{:?}", self.start.position),
            ));
        }
        if self.start.velocity.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::invalid(
                "start.velocity",
                format!("{:?}", self.start.velocity),
            ));
        }

        ensure_positive("course.spacing", self.course.spacing)?;
        ensure_positive("course.ring_radius", self.course.ring_radius)?;
        for (name, (min, max)) in [
            ("course.lateral_range", self.course.lateral_range),
            ("course.altitude_range", self.course.altitude_range),
        ] {
            if !min.is_finite() || !max.is_finite() {
                return Err(ConfigError::invalid(name, format!("({min}, {max})")));
            }
        }

        Ok(())
    }
}

fn ensure_finite(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(name, value))
    }
}

fn ensure_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(name, value))
    }
}
