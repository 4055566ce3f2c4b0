mod controls;
mod ground;
mod integrator;

pub use controls::apply_controls;
pub use ground::clamp_to_ground;
pub use integrator::integrate;
