use bevy::prelude::*;

use crate::{input::KeyBindings, resources::PendingControls, sim::Simulator};

/// Turn held keys into control deltas for the next fixed tick.
pub fn keyboard_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    simulator: Res<Simulator>,
    mut pending: ResMut<PendingControls>,
) {
    let input = bindings.controls_for(&keyboard, &simulator.config().controls);
    if !input.is_neutral() {
        pending.push(input);
    }
}
