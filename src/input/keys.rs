use bevy::input::{keyboard::KeyCode, ButtonInput};
use bevy::prelude::Resource;
use std::collections::HashMap;

use super::text::axis_step;
use crate::components::{ControlAxis, ControlInput};
use crate::resources::ControlConfig;

/// Maps held keys to control commands, one step per key per tick.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, (ControlAxis, f64)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new([
            (KeyCode::KeyW, ControlAxis::Pitch, 1.0),
            (KeyCode::KeyS, ControlAxis::Pitch, -1.0),
            (KeyCode::KeyA, ControlAxis::Yaw, -1.0),
            (KeyCode::KeyD, ControlAxis::Yaw, 1.0),
            (KeyCode::KeyQ, ControlAxis::Roll, -1.0),
            (KeyCode::KeyE, ControlAxis::Roll, 1.0),
            (KeyCode::Equal, ControlAxis::Throttle, 1.0),
            (KeyCode::NumpadAdd, ControlAxis::Throttle, 1.0),
            (KeyCode::ArrowUp, ControlAxis::Throttle, 1.0),
            (KeyCode::Minus, ControlAxis::Throttle, -1.0),
            (KeyCode::NumpadSubtract, ControlAxis::Throttle, -1.0),
            (KeyCode::ArrowDown, ControlAxis::Throttle, -1.0),
        ])
    }
}

impl KeyBindings {
    pub fn new(bindings: impl IntoIterator<Item = (KeyCode, ControlAxis, f64)>) -> Self {
        Self {
            bindings: bindings
                .into_iter()
                .map(|(key, axis, sign)| (key, (axis, sign)))
                .collect(),
        }
    }

    /// Rebind `key`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyCode, axis: ControlAxis, sign: f64) {
        self.bindings.insert(key, (axis, sign));
    }

    pub fn binding(&self, key: KeyCode) -> Option<(ControlAxis, f64)> {
        self.bindings.get(&key).copied()
    }

    /// Deltas requested by every currently held bound key.
    pub fn controls_for(
        &self,
        keyboard: &ButtonInput<KeyCode>,
        controls: &ControlConfig,
    ) -> ControlInput {
        let mut input = ControlInput::default();
        for key in keyboard.get_pressed() {
            if let Some((axis, sign)) = self.binding(*key) {
                input.nudge(axis, sign * axis_step(axis, controls));
            }
        }
        input
    }
}
