use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Control axis a single command acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlAxis {
    Throttle,
    Pitch,
    Yaw,
    Roll,
}

/// Requested change to the controls for one tick. Angles in radians.
///
/// Produced fresh each tick by an input adapter and consumed once by
/// [`Simulator::step`](crate::sim::Simulator::step).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    pub throttle_delta: f64,
    pub pitch_delta: f64,
    pub yaw_delta: f64,
    pub roll_delta: f64,
}

impl ControlInput {
    pub fn new(throttle_delta: f64, pitch_delta: f64, yaw_delta: f64, roll_delta: f64) -> Self {
        Self {
            throttle_delta,
            pitch_delta,
            yaw_delta,
            roll_delta,
        }
    }

    /// Add `amount` to the delta for `axis`.
    pub fn nudge(&mut self, axis: ControlAxis, amount: f64) {
        match axis {
            ControlAxis::Throttle => self.throttle_delta += amount,
            ControlAxis::Pitch => self.pitch_delta += amount,
            ControlAxis::Yaw => self.yaw_delta += amount,
            ControlAxis::Roll => self.roll_delta += amount,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for ControlInput {
    type Output = ControlInput;

    fn add(mut self, rhs: ControlInput) -> ControlInput {
        self += rhs;
        self
    }
}

impl AddAssign for ControlInput {
    fn add_assign(&mut self, rhs: ControlInput) {
        self.throttle_delta += rhs.throttle_delta;
        self.pitch_delta += rhs.pitch_delta;
        self.yaw_delta += rhs.yaw_delta;
        self.roll_delta += rhs.roll_delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nudge_accumulates() {
        let mut input = ControlInput::default();
        assert!(input.is_neutral());

        input.nudge(ControlAxis::Pitch, 0.5);
        input.nudge(ControlAxis::Pitch, 0.25);
        input.nudge(ControlAxis::Throttle, -0.04);

        assert_eq!(input, ControlInput::new(-0.04, 0.75, 0.0, 0.0));
        assert!(!input.is_neutral());
    }

    #[test]
    fn test_add() {
        let a = ControlInput::new(0.1, 0.2, 0.3, 0.4);
        let b = ControlInput::new(1.0, 0.0, -0.3, 0.0);
        assert_eq!(a + b, ControlInput::new(1.1, 0.2, 0.0, 0.4));
    }
}
