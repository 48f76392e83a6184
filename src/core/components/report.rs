use crate::core::errors::ProcessingError;
use crate::core::jobs::job::{Job, JobStatus};
use crate::core::types::JobId;
use log::debug;

/// Operation a driver attempted on a job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    MarkReady,
    MarkStarted,
    FractureMineral,
    MarkFinished,
}

impl std::fmt::Display for StepAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StepAction::MarkReady => "mark_ready",
            StepAction::MarkStarted => "mark_started",
            StepAction::FractureMineral => "fracture_mineral",
            StepAction::MarkFinished => "mark_finished",
        };
        f.write_str(name)
    }
}

/// One attempted operation and where it left the job
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRecord {
    pub job: JobId,
    pub action: StepAction,
    /// Job status after the attempt
    pub status: JobStatus,
    pub error: Option<ProcessingError>,
}

impl TransitionRecord {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// How a step ended
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The whole queue was scanned
    Completed,
    /// The component was inactive and touched nothing
    Inactive,
    /// Scanning stopped at the first failure
    Aborted(ProcessingError),
}

/// Everything a single `step()` did, in the order it happened
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub component: String,
    pub outcome: StepOutcome,
    pub records: Vec<TransitionRecord>,
}

impl StepReport {
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            outcome: StepOutcome::Completed,
            records: Vec::new(),
        }
    }

    /// Record the result of an operation on `job` and hand the result back
    pub fn record(
        &mut self,
        job: &Job,
        action: StepAction,
        result: Result<(), ProcessingError>,
    ) -> Result<(), ProcessingError> {
        debug!(
            "[{}] {} on job {} -> {}",
            self.component,
            action,
            job.id(),
            job.status()
        );
        self.records.push(TransitionRecord {
            job: job.id(),
            action,
            status: job.status(),
            error: result.as_ref().err().cloned(),
        });
        result
    }

    pub fn errors(&self) -> impl Iterator<Item = &ProcessingError> {
        self.records.iter().filter_map(|r| r.error.as_ref())
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self.outcome, StepOutcome::Aborted(_))
    }
}

/// Reports from the two drivers for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub manager: StepReport,
    pub factory: StepReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::minerals::{Mineral, MineralType};
    use std::sync::Arc;

    fn job() -> Job {
        let mt = Arc::new(MineralType::new("topaz", 200, 1000.0, 32));
        Job::new("fracture", Mineral::new(mt, "fractured", 4))
    }

    #[test]
    fn test_action_names() {
        assert_eq!(StepAction::MarkReady.to_string(), "mark_ready");
        assert_eq!(StepAction::MarkStarted.to_string(), "mark_started");
        assert_eq!(StepAction::FractureMineral.to_string(), "fracture_mineral");
        assert_eq!(StepAction::MarkFinished.to_string(), "mark_finished");
    }

    #[test]
    fn test_record_keeps_status_and_error() {
        let mut job = job();
        let mut report = StepReport::new("manager");

        let result = job.mark_ready();
        assert!(report.record(&job, StepAction::MarkReady, result).is_ok());

        let result = job.mark_finished();
        assert!(report.record(&job, StepAction::MarkFinished, result).is_err());

        assert_eq!(report.records.len(), 2);
        assert!(report.records[0].is_ok());
        assert_eq!(report.records[0].status, JobStatus::Ready);
        assert_eq!(report.records[1].status, JobStatus::Ready);
        assert_eq!(report.errors().count(), 1);
        assert!(!report.is_aborted());
    }
}
