use crate::core::components::report::StepReport;
use crate::core::jobs::queue::JobQueue;

/// A driver polled once per tick.
///
/// Implementors scan the whole queue front to back and apply whatever
/// transitions they own. Steps run to completion (or to their own early
/// return) before the next driver is invoked.
pub trait Stepper {
    /// Component name used in logs and reports
    fn name(&self) -> &str;

    /// Run one pass over the queue
    fn step(&mut self, queue: &mut JobQueue) -> StepReport;
}
