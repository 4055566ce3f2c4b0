use nalgebra::Vector3;

use crate::components::FlightState;
use crate::resources::PhysicsConfig;

/// Advance velocity, position, heading and fuel by one explicit Euler step.
///
/// Forces are evaluated at the attitude the tick started with; the banked-turn
/// yaw change is applied after that, so it only shows up in the next tick's
/// thrust and lift directions. Once the tank is empty the throttle is forced
/// to zero, re-evaluated every tick.
pub fn integrate(state: &mut FlightState, physics: &PhysicsConfig, dt: f64) {
    let forward = state.forward();
    let up = state.up();

    let thrust = forward * (physics.thrust_power * state.throttle);
    let speed = state.velocity.norm();
    let drag = state.velocity * (-physics.drag_coefficient * speed);
    let lift = up * (physics.lift_coefficient * speed * speed);
    let gravity = Vector3::new(0.0, -physics.mass * physics.gravity, 0.0);

    // Banked turn: roll alone slowly swings the heading round
    state.yaw += state.roll * physics.roll_yaw_coupling * dt;

    let acceleration = (thrust + drag + lift + gravity) / physics.mass;
    state.velocity += acceleration * dt;
    state.position += state.velocity * dt;

    let fuel_use = physics.fuel_burn_rate * state.throttle * dt;
    state.fuel = (state.fuel - fuel_use).max(0.0);

    if state.fuel <= 0.0 {
        state.throttle = 0.0;
    }
}
