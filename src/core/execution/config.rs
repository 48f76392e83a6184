//! Configuration for msim simulation execution
//!
//! Controls tick pacing, how much work is seeded at startup and the initial
//! state of the drivers.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Wall-clock wait before each tick
    pub tick_interval: Duration,
    /// Stop after this many ticks. `None` runs until the process is killed.
    pub max_ticks: Option<u64>,
    /// Number of jobs seeded before the first tick
    pub job_count: usize,
    /// Seed for job generation. `None` draws from OS entropy.
    pub random_seed: Option<u64>,
    /// Whether the factory starts online
    pub factory_active: bool,
    /// Action label given to seeded jobs
    pub job_action: String,
    /// State label given to seeded minerals
    pub mineral_state: String,
}

impl SimulationConfig {
    /// Create a configuration with default values
    ///
    /// One second ticks, ten seeded jobs, factory online, no tick limit.
    pub fn new() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            max_ticks: None,
            job_count: 10,
            random_seed: None,
            factory_active: true,
            job_action: "fracture".to_string(),
            mineral_state: "fractured".to_string(),
        }
    }

    /// Set the wall-clock wait before each tick
    ///
    /// # Arguments
    /// * `interval` - Time to sleep before every tick; must be non-zero
    ///
    /// # Returns
    /// A new configuration with the specified interval
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Stop the run loop after a fixed number of ticks
    ///
    /// # Arguments
    /// * `max_ticks` - Number of ticks after which `run()` returns
    ///
    /// # Returns
    /// A new configuration with the tick limit set
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Set how many jobs are seeded before the first tick
    pub fn with_job_count(mut self, count: usize) -> Self {
        self.job_count = count;
        self
    }

    /// Use a fixed seed for job generation
    ///
    /// # Arguments
    /// * `seed` - Seed passed to `StdRng::seed_from_u64`
    ///
    /// # Returns
    /// A new configuration whose seeded jobs are reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Set whether the factory starts online
    ///
    /// # Note
    /// The manager has no such switch and always runs
    pub fn with_factory_active(mut self, active: bool) -> Self {
        self.factory_active = active;
        self
    }

    /// Check the configuration can drive a run
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_interval.is_zero() {
            return Err("Tick interval must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
