pub mod factory;
pub mod manager;
pub mod report;
pub mod traits;

// Re-export commonly used types
pub use factory::Factory;
pub use manager::Manager;
pub use report::{StepAction, StepOutcome, StepReport, TickReport, TransitionRecord};
pub use traits::Stepper;
