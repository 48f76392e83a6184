use crate::core::errors::ProcessingError;
use crate::core::minerals::mineral::Mineral;
use crate::core::types::JobId;
use serde::{Deserialize, Serialize};

/// Lifecycle of a job. The only legal edges are
/// `New -> Ready -> Started -> Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    New,
    Ready,
    Started,
    Finished,
}

impl JobStatus {
    /// All statuses in lifecycle order
    pub const ALL: [JobStatus; 4] = [
        JobStatus::New,
        JobStatus::Ready,
        JobStatus::Started,
        JobStatus::Finished,
    ];

    /// The single status reachable from this one, if any
    pub fn next(self) -> Option<JobStatus> {
        match self {
            JobStatus::New => Some(JobStatus::Ready),
            JobStatus::Ready => Some(JobStatus::Started),
            JobStatus::Started => Some(JobStatus::Finished),
            JobStatus::Finished => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == JobStatus::Finished
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::New => "NEW",
            JobStatus::Ready => "READY",
            JobStatus::Started => "STARTED",
            JobStatus::Finished => "FINISHED",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work carrying one mineral through its processing lifecycle
#[derive(Debug)]
pub struct Job {
    id: JobId,
    action: String,
    mineral: Mineral,
    status: JobStatus,
}

impl Job {
    /// Create a job in status `New` that takes ownership of `mineral`
    pub fn new(action: &str, mineral: Mineral) -> Self {
        Self {
            id: JobId::new(),
            action: action.to_string(),
            mineral,
            status: JobStatus::New,
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn mineral(&self) -> &Mineral {
        &self.mineral
    }

    pub(crate) fn mineral_mut(&mut self) -> &mut Mineral {
        &mut self.mineral
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    /// NEW -> READY. Set by the manager.
    pub fn mark_ready(&mut self) -> Result<(), ProcessingError> {
        self.advance(JobStatus::New, JobStatus::Ready)
    }

    /// READY -> STARTED. Set by the factory right before processing.
    pub fn mark_started(&mut self) -> Result<(), ProcessingError> {
        self.advance(JobStatus::Ready, JobStatus::Started)
    }

    /// STARTED -> FINISHED. Set by the factory after processing succeeds.
    pub fn mark_finished(&mut self) -> Result<(), ProcessingError> {
        self.advance(JobStatus::Started, JobStatus::Finished)
    }

    fn advance(&mut self, expected: JobStatus, to: JobStatus) -> Result<(), ProcessingError> {
        if self.status != expected {
            return Err(ProcessingError::InvalidTransition {
                job: self.id,
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JOB {} {} {}", self.action, self.status, self.mineral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::minerals::catalog::MineralType;
    use std::sync::Arc;

    fn topaz_job() -> Job {
        let mt = Arc::new(MineralType::new("topaz", 4, 8.0, 8));
        Job::new("fracture", Mineral::new(mt, "fractured", 4))
    }

    #[test]
    fn test_new_job_starts_new() {
        let job = topaz_job();
        assert_eq!(job.status(), JobStatus::New);
        assert_eq!(job.action(), "fracture");
    }

    #[test]
    fn test_full_lifecycle() {
        let mut job = topaz_job();
        job.mark_ready().unwrap();
        assert_eq!(job.status(), JobStatus::Ready);
        job.mark_started().unwrap();
        assert_eq!(job.status(), JobStatus::Started);
        job.mark_finished().unwrap();
        assert_eq!(job.status(), JobStatus::Finished);
        assert!(job.status().is_terminal());
    }

    #[test]
    fn test_skipping_a_state_fails_and_leaves_status() {
        let mut job = topaz_job();

        let err = job.mark_started().unwrap_err();
        assert_eq!(
            err,
            ProcessingError::InvalidTransition {
                job: job.id(),
                from: JobStatus::New,
                to: JobStatus::Started,
            }
        );
        assert_eq!(job.status(), JobStatus::New);

        assert!(job.mark_finished().is_err());
        assert_eq!(job.status(), JobStatus::New);
    }

    #[test]
    fn test_transition_cannot_be_applied_twice() {
        let mut job = topaz_job();
        job.mark_ready().unwrap();
        assert!(job.mark_ready().is_err());
        assert_eq!(job.status(), JobStatus::Ready);

        job.mark_started().unwrap();
        assert!(job.mark_started().is_err());
        assert!(job.mark_ready().is_err());
        assert_eq!(job.status(), JobStatus::Started);
    }

    #[test]
    fn test_finished_is_terminal() {
        let mut job = topaz_job();
        job.mark_ready().unwrap();
        job.mark_started().unwrap();
        job.mark_finished().unwrap();

        assert!(job.mark_ready().is_err());
        assert!(job.mark_started().is_err());
        assert!(job.mark_finished().is_err());
        assert_eq!(job.status(), JobStatus::Finished);
    }

    #[test]
    fn test_status_order() {
        assert_eq!(JobStatus::New.next(), Some(JobStatus::Ready));
        assert_eq!(JobStatus::Ready.next(), Some(JobStatus::Started));
        assert_eq!(JobStatus::Started.next(), Some(JobStatus::Finished));
        assert_eq!(JobStatus::Finished.next(), None);
        assert!(JobStatus::New < JobStatus::Finished);
    }

    #[test]
    fn test_display() {
        let job = topaz_job();
        assert_eq!(
            job.to_string(),
            "JOB fracture NEW MINERAL fractured {topaz 4 8 8} 4"
        );
    }
}
