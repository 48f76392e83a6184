use crate::core::components::report::{StepAction, StepReport};
use crate::core::components::traits::Stepper;
use crate::core::jobs::job::JobStatus;
use crate::core::jobs::queue::JobQueue;
use log::{debug, error};

/// Promotes every NEW job to READY.
///
/// Unlike the factory there is no activity gate, and a failed promotion is
/// logged without stopping the scan.
pub struct Manager {
    id: String,
}

impl Manager {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new("manager")
    }
}

impl Stepper for Manager {
    fn name(&self) -> &str {
        &self.id
    }

    fn step(&mut self, queue: &mut JobQueue) -> StepReport {
        let mut report = StepReport::new(&self.id);
        debug!("[Manager:{}] Step, iterating {} jobs", self.id, queue.len());

        for job in queue.iter_mut() {
            if job.status() != JobStatus::New {
                continue;
            }
            debug!("[Manager:{}] NEW job {} found, making ready", self.id, job.id());
            let result = job.mark_ready();
            if let Err(err) = report.record(job, StepAction::MarkReady, result) {
                error!("[Manager:{}] {}: {}", self.id, err.kind(), err);
            }
        }

        debug!("[Manager:{}] Checking new job requests", self.id);
        report
    }
}
