use crate::core::components::factory::Factory;
use crate::core::components::manager::Manager;
use crate::core::components::report::{StepReport, TickReport};
use crate::core::components::traits::Stepper;
use crate::core::execution::config::SimulationConfig;
use crate::core::jobs::queue::JobQueue;
use crate::core::minerals::registry::MineralTypeRegistry;
use log::{debug, info};
use std::thread;

/// Observer trait for simulation events
pub trait SimulationObserver {
    /// Called after the manager and factory have both stepped
    fn on_tick_complete(&mut self, report: &TickReport);
}

/// Tick driver: owns the queue and registry and invokes the manager then the
/// factory once per tick, strictly in that order.
pub struct SimulationEngine {
    config: SimulationConfig,
    registry: MineralTypeRegistry,
    queue: JobQueue,
    manager: Manager,
    factory: Factory,
    current_tick: u64,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl SimulationEngine {
    /// Create an engine from already seeded parts
    ///
    /// # Arguments
    /// * `config` - Tick pacing and limits
    /// * `registry` - Mineral types referenced by the queued minerals
    /// * `queue` - Jobs to drive, in processing order
    /// * `manager` - Driver that promotes NEW jobs
    /// * `factory` - Driver that processes READY jobs
    pub fn new(
        config: SimulationConfig,
        registry: MineralTypeRegistry,
        queue: JobQueue,
        manager: Manager,
        factory: Factory,
    ) -> Self {
        Self {
            config,
            registry,
            queue,
            manager,
            factory,
            current_tick: 0,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    fn notify_tick_complete(&mut self, report: &TickReport) {
        for observer in &mut self.observers {
            observer.on_tick_complete(report);
        }
    }

    /// Run one tick without waiting: a manager step followed by a factory step
    ///
    /// # Returns
    /// Both step reports, tagged with the new tick number
    pub fn tick(&mut self) -> TickReport {
        self.current_tick += 1;
        debug!("=== Simulation Tick {} ===", self.current_tick);

        let manager = self.manager.step(&mut self.queue);
        let factory = self.factory.step(&mut self.queue);

        let report = TickReport {
            tick: self.current_tick,
            manager,
            factory,
        };
        self.notify_tick_complete(&report);
        report
    }

    /// Sleep for the tick interval, then tick, until `max_ticks` is reached.
    /// Without a limit this never returns. Returns the final tick count.
    pub fn run(&mut self) -> Result<u64, String> {
        self.config.validate()?;
        info!(
            "Starting simulation: {} jobs, tick interval {:?}",
            self.queue.len(),
            self.config.tick_interval
        );

        loop {
            if let Some(max) = self.config.max_ticks {
                if self.current_tick >= max {
                    return Ok(self.current_tick);
                }
            }

            thread::sleep(self.config.tick_interval);
            self.tick();
        }
    }

    /// Run one manager step without advancing the tick counter
    pub fn step_manager(&mut self) -> StepReport {
        self.manager.step(&mut self.queue)
    }

    /// Run one factory step without advancing the tick counter
    pub fn step_factory(&mut self) -> StepReport {
        self.factory.step(&mut self.queue)
    }

    /// Get current simulation tick
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Get the configuration the engine runs with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Get the job queue
    pub fn queue(&self) -> &JobQueue {
        &self.queue
    }

    /// Get the mineral type registry
    pub fn registry(&self) -> &MineralTypeRegistry {
        &self.registry
    }

    /// Get the factory
    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    /// Get the factory mutably, e.g. to take it offline between ticks
    pub fn factory_mut(&mut self) -> &mut Factory {
        &mut self.factory
    }
}
