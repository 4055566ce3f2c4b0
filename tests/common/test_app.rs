use bevy::{ecs::event::Events, prelude::*};
use ringflyer::{plugins::FlightPlugin, resources::SimulationConfig, sim::Simulator, Ring};

// Builder for creating a headless test application around the flight plugin
pub struct TestAppBuilder {
    config: SimulationConfig,
    seed: u64,
    rings: Option<Vec<Ring>>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            seed: 42,
            rings: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the generated course with these rings
    pub fn with_rings(mut self, rings: Vec<Ring>) -> Self {
        self.rings = Some(rings);
        self
    }

    pub fn build(self) -> TestApp {
        let plugin = FlightPlugin::new(self.config.clone())
            .expect("test config should validate")
            .with_seed(self.seed);

        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(plugin);

        if let Some(rings) = self.rings {
            app.insert_resource(Simulator::with_rings(self.config, rings));
        }

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Run the fixed-tick flight schedule directly, independent of wall-clock time
    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn simulator(&self) -> &Simulator {
        self.app.world().resource::<Simulator>()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    pub fn drain_events<E: Event>(&mut self) -> Vec<E> {
        self.app
            .world_mut()
            .resource_mut::<Events<E>>()
            .drain()
            .collect()
    }
}
