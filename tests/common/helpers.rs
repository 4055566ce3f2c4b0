use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use ringflyer::{resources::SimulationConfig, utils::RngManager, ControlInput, Ring, Simulator};

pub const DT: f64 = 0.1;

/// Simulator on the default config with no rings in the way
pub fn empty_course_simulator() -> Simulator {
    Simulator::with_rings(SimulationConfig::default(), Vec::new())
}

/// Simulator with a custom config and no rings
pub fn simulator_with(config: SimulationConfig) -> Simulator {
    Simulator::with_rings(config, Vec::new())
}

pub fn ring_at(x: f64, y: f64, z: f64, radius: f64) -> Ring {
    Ring::new(Vector3::new(x, y, z), radius)
}

/// Deterministic stream of deliberately oversized control inputs
pub fn input_stream(seed: u64) -> ChaCha8Rng {
    RngManager::new(seed).get_rng("test_inputs")
}

pub fn random_input(rng: &mut ChaCha8Rng, scale: f64) -> ControlInput {
    ControlInput::new(
        rng.gen_range(-scale..scale),
        rng.gen_range(-scale..scale),
        rng.gen_range(-scale..scale),
        rng.gen_range(-scale..scale),
    )
}

/// Run `ticks` idle steps
pub fn run_idle(sim: &mut Simulator, ticks: usize) {
    for _ in 0..ticks {
        sim.step(&ControlInput::default(), DT);
    }
}
