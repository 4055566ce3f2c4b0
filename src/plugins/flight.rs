use bevy::prelude::*;

use crate::{
    input::KeyBindings,
    plugins::{FlameOutEvent, RingPassedEvent},
    resources::{PendingControls, SimulationConfig},
    sim::Simulator,
    systems::{flight_step_system, keyboard_control_system},
    utils::{clock_seed, ConfigError},
};

/// Fixed-tick stages of the flight loop
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Input,
    Step,
}

/// Runs a [`Simulator`] as a resource, stepped once per `FixedUpdate`.
pub struct FlightPlugin {
    config: SimulationConfig,
    seed: Option<u64>,
}

impl FlightPlugin {
    /// Errors when the config does not validate.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.course.seed;
        Ok(Self { config, seed })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let seed = self.seed.unwrap_or_else(|| {
            let seed = clock_seed();
            warn!("No course seed provided, using clock seed {}", seed);
            seed
        });

        app.insert_resource(Simulator::new(self.config.clone(), seed))
            .init_resource::<PendingControls>()
            .init_resource::<KeyBindings>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<RingPassedEvent>()
            .add_event::<FlameOutEvent>()
            .configure_sets(FixedUpdate, (FlightSet::Input, FlightSet::Step).chain())
            .add_systems(
                FixedUpdate,
                (
                    keyboard_control_system.in_set(FlightSet::Input),
                    flight_step_system.in_set(FlightSet::Step),
                ),
            );

        app.insert_resource(Time::<Fixed>::from_seconds(self.config.physics.time_step));
    }
}
