use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// One course seed, many named streams. Drawing from the `"ring_course"`
/// stream never shifts what another stream yields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Seed of the stream called `name`.
    pub fn stream_seed(&self, name: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        (self.master_seed, name).hash(&mut hasher);
        hasher.finish()
    }

    /// Fresh generator positioned at the start of stream `name`.
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.stream_seed(name))
    }
}

/// Wall-clock seed for drivers that were not given one.
pub fn clock_seed() -> u64 {
    Utc::now().timestamp_micros() as u64
}
