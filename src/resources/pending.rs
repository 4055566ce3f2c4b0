use bevy::prelude::Resource;

use crate::components::ControlInput;

/// Control deltas collected from input adapters, consumed by the next step.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PendingControls(ControlInput);

impl PendingControls {
    pub fn push(&mut self, input: ControlInput) {
        self.0 += input;
    }

    pub fn peek(&self) -> &ControlInput {
        &self.0
    }

    /// Hand over the accumulated deltas and reset to neutral.
    pub fn take(&mut self) -> ControlInput {
        std::mem::take(&mut self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_resets() {
        let mut pending = PendingControls::default();
        pending.push(ControlInput::new(0.04, 0.0, 0.0, 0.0));
        pending.push(ControlInput::new(0.04, 0.1, 0.0, 0.0));

        let taken = pending.take();
        assert_eq!(taken, ControlInput::new(0.08, 0.1, 0.0, 0.0));
        assert!(pending.peek().is_neutral());
    }
}
