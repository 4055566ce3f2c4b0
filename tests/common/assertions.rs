use approx::assert_relative_eq;
use nalgebra::Vector3;
use ringflyer::{utils::deg_to_rad, FlightState};

/// Assert every field of the flight state is a finite number
#[track_caller]
pub fn assert_state_finite(state: &FlightState) {
    assert!(
        state.position.iter().all(|c| c.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        state.velocity.iter().all(|c| c.is_finite()),
        "Velocity is not finite: {:?}",
        state.velocity
    );
    assert!(state.yaw.is_finite(), "Yaw is not finite");
    assert!(state.pitch.is_finite(), "Pitch is not finite");
    assert!(state.roll.is_finite(), "Roll is not finite");
    assert!(state.fuel.is_finite(), "Fuel is not finite");
}

/// Assert the invariants that must hold after every step with default limits
#[track_caller]
pub fn assert_flight_invariants(state: &FlightState) {
    assert_state_finite(state);
    assert!(
        (0.0..=1.0).contains(&state.throttle),
        "Throttle out of range: {}",
        state.throttle
    );
    assert!(
        state.pitch.abs() <= deg_to_rad(45.0) + 1e-12,
        "Pitch out of range: {}",
        state.pitch
    );
    assert!(
        state.roll.abs() <= deg_to_rad(80.0) + 1e-12,
        "Roll out of range: {}",
        state.roll
    );
    assert!(state.fuel >= 0.0, "Fuel negative: {}", state.fuel);
    assert!(state.position.y >= 0.0, "Below ground: {}", state.position.y);
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vec_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
