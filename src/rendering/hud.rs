use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::ControlAxis;
use crate::input::TOKEN_TABLE;
use crate::sim::Simulator;
use crate::utils::{rad_to_deg, wrap_degrees, VectorExt};

/// Read-only snapshot of a simulator for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub tick: u64,
    pub time_step: f64,
    pub position: [f64; 3],
    /// |velocity| [m/s]
    pub speed: f64,
    /// Velocity component along the nose [m/s]
    pub forward_speed: f64,
    pub yaw_deg: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
    /// Yaw wrapped into [0, 360)
    pub heading_deg: f64,
    pub throttle_percent: f64,
    pub fuel: f64,
    pub score: u32,
    pub rings_remaining: usize,
}

impl Telemetry {
    pub fn capture(simulator: &Simulator) -> Self {
        let state = simulator.state();
        let speed = state.speed();
        let forward_speed = state.velocity.normalize_or_zero().dot(&state.forward()) * speed;
        let yaw_deg = rad_to_deg(state.yaw);

        Self {
            tick: simulator.tick(),
            time_step: simulator.config().physics.time_step,
            position: [state.position.x, state.position.y, state.position.z],
            speed,
            forward_speed,
            yaw_deg,
            pitch_deg: rad_to_deg(state.pitch),
            roll_deg: rad_to_deg(state.roll),
            heading_deg: wrap_degrees(yaw_deg),
            throttle_percent: state.throttle * 100.0,
            fuel: state.fuel,
            score: state.score,
            rings_remaining: simulator.rings_remaining(),
        }
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.position;
        writeln!(f, "=== Tick {} ({:.1}s) ===", self.tick, self.time_step)?;
        writeln!(f, "Position (x,y,z): {:.2}, {:.2}, {:.2} m", x, y, z)?;
        writeln!(
            f,
            "Speed: {:.2} m/s  (forward={:.2})",
            self.speed, self.forward_speed
        )?;
        writeln!(
            f,
            "Yaw/Pitch/Roll (deg): {:.2} / {:.2} / {:.2}  (heading {:.0})",
            self.yaw_deg, self.pitch_deg, self.roll_deg, self.heading_deg
        )?;
        writeln!(
            f,
            "Throttle: {:.2}%  Fuel: {:.2} u",
            self.throttle_percent, self.fuel
        )?;
        write!(
            f,
            "Score: {}  Rings left: {}",
            self.score, self.rings_remaining
        )
    }
}

/// Usage text for the line-based driver.
pub fn help_text() -> String {
    let mut text = String::from("Commands (several per line, separated by spaces):\n");
    for (axis, sign, label) in [
        (ControlAxis::Throttle, 1.0, "throttle up"),
        (ControlAxis::Throttle, -1.0, "throttle down"),
        (ControlAxis::Pitch, 1.0, "pitch up"),
        (ControlAxis::Pitch, -1.0, "pitch down"),
        (ControlAxis::Yaw, -1.0, "yaw left"),
        (ControlAxis::Yaw, 1.0, "yaw right"),
        (ControlAxis::Roll, -1.0, "roll left"),
        (ControlAxis::Roll, 1.0, "roll right"),
    ] {
        let aliases: Vec<&str> = TOKEN_TABLE
            .iter()
            .filter(|&&(_, a, s)| a == axis && s == sign)
            .map(|&(name, _, _)| name)
            .collect();
        text.push_str(&format!("  {:<26} : {}\n", aliases.join(" / "), label));
    }
    text.push_str(&format!("  {:<26} : {}\n", "help", "show this help"));
    text.push_str(&format!("  {:<26} : {}\n", "exit", "quit immediately"));
    text
}
