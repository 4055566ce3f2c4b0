use bevy::log::{debug, info};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::components::{generate_rings, ControlInput, FlightState, Ring};
use crate::resources::SimulationConfig;
use crate::systems::{apply_controls, check_ring_passage, clamp_to_ground, integrate};
use crate::utils::RngManager;

/// Name of the RNG stream the ring layout is drawn from.
pub const RING_COURSE_STREAM: &str = "ring_course";

/// What happened during a single [`Simulator::step`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Indices into [`Simulator::rings`] passed this tick
    pub rings_passed: Vec<usize>,
    /// Fuel went from positive to empty this tick
    pub fuel_exhausted: bool,
    /// The ground clamp fired this tick
    pub ground_contact: bool,
}

/// Owns the flight state and ring course and advances them one fixed tick at
/// a time. Single owner, no interior mutability.
#[derive(Resource, Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    state: FlightState,
    rings: Vec<Ring>,
    seed: Option<u64>,
    tick: u64,
    elapsed: f64,
}

impl Simulator {
    /// Build a simulator whose ring course is drawn from `seed`. The same seed
    /// and course config always give the same layout.
    pub fn new(config: SimulationConfig, seed: u64) -> Self {
        let mut rng = RngManager::new(seed).get_rng(RING_COURSE_STREAM);
        let rings = generate_rings(&config.course, &mut rng);
        info!("Simulator ready, course seed {}", seed);
        Self::assemble(config, rings, Some(seed))
    }

    /// Build a simulator around an explicit ring course.
    pub fn with_rings(config: SimulationConfig, rings: Vec<Ring>) -> Self {
        Self::assemble(config, rings, None)
    }

    fn assemble(config: SimulationConfig, rings: Vec<Ring>, seed: Option<u64>) -> Self {
        let state = FlightState::from_start(&config.start);
        Self {
            config,
            state,
            rings,
            seed,
            tick: 0,
            elapsed: 0.0,
        }
    }

    /// Advance one tick: apply the control deltas, integrate forces, score
    /// rings at the new position, then clamp to the ground.
    pub fn step(&mut self, input: &ControlInput, dt: f64) -> StepReport {
        let had_fuel = self.state.fuel > 0.0;

        apply_controls(&mut self.state, input, &self.config.limits);
        integrate(&mut self.state, &self.config.physics, dt);
        let rings_passed = check_ring_passage(
            &mut self.state,
            &mut self.rings,
            self.config.course.score_per_ring,
        );
        let ground_contact = clamp_to_ground(&mut self.state, self.config.physics.bounce_damping);

        self.tick += 1;
        self.elapsed += dt;

        for index in &rings_passed {
            info!(
                "Tick {}: passed ring {}, score {}",
                self.tick, index, self.state.score
            );
        }
        let fuel_exhausted = had_fuel && self.state.out_of_fuel();
        if fuel_exhausted {
            info!("Tick {}: fuel exhausted, engine out", self.tick);
        }
        if ground_contact {
            debug!(
                "Tick {}: ground contact, vertical speed now {:.2}",
                self.tick, self.state.velocity.y
            );
        }

        StepReport {
            rings_passed,
            fuel_exhausted,
            ground_contact,
        }
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    /// Rings in generation order.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Course seed, `None` when the rings were supplied explicitly.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn rings_remaining(&self) -> usize {
        self.rings.iter().filter(|r| !r.passed).count()
    }

    /// A run ends when the tank is empty.
    pub fn is_finished(&self) -> bool {
        self.state.out_of_fuel()
    }
}
