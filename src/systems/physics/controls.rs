use crate::components::{ControlInput, FlightState};
use crate::resources::FlightLimits;

/// Apply one tick's control deltas. Throttle, pitch and roll are clamped to
/// their limits, yaw accumulates freely.
pub fn apply_controls(state: &mut FlightState, input: &ControlInput, limits: &FlightLimits) {
    let max_pitch = limits.max_pitch();
    let max_roll = limits.max_roll();

    state.throttle = (state.throttle + input.throttle_delta).clamp(0.0, 1.0);
    state.pitch = (state.pitch + input.pitch_delta).clamp(-max_pitch, max_pitch);
    state.yaw += input.yaw_delta;
    state.roll = (state.roll + input.roll_delta).clamp(-max_roll, max_roll);
}
