pub mod core;

// Re-export commonly used types
pub use crate::core::builder::Simulation;
pub use crate::core::components::{Factory, Manager, StepReport, Stepper, TickReport};
pub use crate::core::errors::ProcessingError;
pub use crate::core::execution::{SimulationConfig, SimulationEngine, SimulationObserver};
pub use crate::core::jobs::{Job, JobQueue, JobStatus};
pub use crate::core::minerals::{Mineral, MineralType, MineralTypeRegistry};
pub use crate::core::types::{JobId, MineralId};
