use crate::components::FlightState;

/// Keep the aircraft above the ground plane. A downward velocity on contact
/// is multiplied by `bounce_damping` (negative, so it flips into a small
/// bounce). Returns true when the clamp fired.
pub fn clamp_to_ground(state: &mut FlightState, bounce_damping: f64) -> bool {
    if state.position.y >= 0.0 {
        return false;
    }

    state.position.y = 0.0;
    if state.velocity.y < 0.0 {
        state.velocity.y *= bounce_damping;
    }
    true
}
