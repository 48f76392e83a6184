use crate::core::components::factory::Factory;
use crate::core::components::manager::Manager;
use crate::core::execution::config::SimulationConfig;
use crate::core::execution::simulation_engine::SimulationEngine;
use crate::core::jobs::job::Job;
use crate::core::jobs::queue::JobQueue;
use crate::core::minerals::catalog::{default_catalog, MineralType};
use crate::core::minerals::mineral::Mineral;
use crate::core::minerals::registry::MineralTypeRegistry;
use crate::core::types::JobId;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Imperative API for seeding the registry and job queue before a run
pub struct Simulation {
    config: SimulationConfig,
    registry: MineralTypeRegistry,
    queue: JobQueue,
    rng: StdRng,
}

impl Simulation {
    /// Create a simulation with the default mineral catalog and an empty queue
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            registry: MineralTypeRegistry::from_catalog(default_catalog()),
            queue: JobQueue::new(),
            rng,
        }
    }

    /// Replace the mineral type registry
    pub fn with_registry(mut self, registry: MineralTypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register an additional mineral type
    pub fn add_mineral_type(&mut self, mineral_type: MineralType) {
        self.registry.add_type(mineral_type);
    }

    /// Queue a NEW job for a mineral of a registered type
    pub fn add_job(&mut self, type_name: &str, fractures: u32) -> Result<JobId, String> {
        let mineral_type = self
            .registry
            .try_get(type_name)
            .cloned()
            .ok_or_else(|| format!("Mineral type '{}' not found", type_name))?;

        let mineral = Mineral::new(mineral_type, &self.config.mineral_state, fractures);
        let job = Job::new(&self.config.job_action, mineral);
        debug!("Seeding {}", job);
        Ok(self.queue.add_job(job))
    }

    /// Queue `config.job_count` jobs with a random type and a random
    /// initial fracture count of 2, 4, 8 or 16
    pub fn seed_jobs(&mut self) -> Result<Vec<JobId>, String> {
        let names = self.registry.type_names();
        if names.is_empty() && self.config.job_count > 0 {
            return Err("Cannot seed jobs: no mineral types registered".to_string());
        }

        let mut ids = Vec::with_capacity(self.config.job_count);
        for _ in 0..self.config.job_count {
            let name = names
                .choose(&mut self.rng)
                .cloned()
                .ok_or_else(|| "No mineral type to choose from".to_string())?;
            let exponent: u32 = self.rng.gen_range(1..=4);
            ids.push(self.add_job(&name, 1u32 << exponent)?);
        }

        info!("Seeded {} jobs", ids.len());
        Ok(ids)
    }

    pub fn registry(&self) -> &MineralTypeRegistry {
        &self.registry
    }

    pub fn queue(&self) -> &JobQueue {
        &self.queue
    }

    /// Assemble the engine with a manager and a factory
    pub fn build(self) -> Result<SimulationEngine, String> {
        self.config.validate()?;
        let factory = Factory::new("factory", self.config.factory_active);
        Ok(SimulationEngine::new(
            self.config,
            self.registry,
            self.queue,
            Manager::new("manager"),
            factory,
        ))
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
