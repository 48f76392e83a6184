use crate::core::components::report::{StepAction, StepOutcome, StepReport};
use crate::core::components::traits::Stepper;
use crate::core::errors::ProcessingError;
use crate::core::jobs::job::{Job, JobStatus};
use crate::core::jobs::queue::JobQueue;
use crate::core::minerals::mineral::Mineral;
use crate::core::types::JobId;
use log::{debug, error, info};

/// Processes READY jobs: start, fracture, finish.
///
/// The first failure ends the current step. Jobs later in the queue wait for
/// the next tick, and a job whose fracture failed stays in STARTED.
pub struct Factory {
    id: String,
    active: bool,
    /// Job most recently taken into processing
    current_job: Option<JobId>,
}

impl Factory {
    pub fn new(id: &str, active: bool) -> Self {
        Self {
            id: id.to_string(),
            active,
            current_job: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn current_job(&self) -> Option<JobId> {
        self.current_job
    }

    /// Double the mineral's fracture counter.
    ///
    /// Fails without touching the counter when `fractures * 2 > limit`.
    pub fn fracture_mineral(&self, mineral: &mut Mineral) -> Result<(), ProcessingError> {
        debug!("[Factory:{}] FractureMineral {}", self.id, mineral);
        let fractures = mineral.fractures();
        let limit = mineral.mineral_type().fracture_limit();

        let doubled = u64::from(fractures) * 2;
        if doubled > u64::from(limit) {
            return Err(ProcessingError::FractureLimitExceeded {
                mineral: mineral.id(),
                fractures,
                limit,
            });
        }

        // doubled <= limit, so it fits in u32
        mineral.set_fractures(fractures * 2);
        Ok(())
    }

    fn process_job(&mut self, job: &mut Job, report: &mut StepReport) -> Result<(), ProcessingError> {
        self.current_job = Some(job.id());

        let result = job.mark_started();
        report.record(job, StepAction::MarkStarted, result)?;

        let result = self.fracture_mineral(job.mineral_mut());
        report.record(job, StepAction::FractureMineral, result)?;

        let result = job.mark_finished();
        report.record(job, StepAction::MarkFinished, result)?;

        info!("[Factory:{}] Finished {}", self.id, job);
        Ok(())
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new("factory", true)
    }
}

impl Stepper for Factory {
    fn name(&self) -> &str {
        &self.id
    }

    fn step(&mut self, queue: &mut JobQueue) -> StepReport {
        let mut report = StepReport::new(&self.id);
        if !self.active {
            info!("[Factory:{}] Factory is offline", self.id);
            report.outcome = StepOutcome::Inactive;
            return report;
        }

        debug!("[Factory:{}] Making a step", self.id);
        for job in queue.iter_mut() {
            if job.status() != JobStatus::Ready {
                continue;
            }
            if let Err(err) = self.process_job(job, &mut report) {
                error!("[Factory:{}] {}: {}", self.id, err.kind(), err);
                report.outcome = StepOutcome::Aborted(err);
                return report;
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::minerals::MineralType;
    use std::sync::Arc;

    fn mineral(fractures: u32, limit: u32) -> Mineral {
        let mt = Arc::new(MineralType::new("topaz", 4, 8.0, limit));
        Mineral::new(mt, "fractured", fractures)
    }

    fn ready_job(fractures: u32, limit: u32) -> Job {
        let mut job = Job::new("fracture", mineral(fractures, limit));
        job.mark_ready().unwrap();
        job
    }

    #[test]
    fn test_fracture_within_limit() {
        let factory = Factory::default();
        let mut m = mineral(4, 8);
        factory.fracture_mineral(&mut m).unwrap();
        assert_eq!(m.fractures(), 8);
    }

    #[test]
    fn test_fracture_over_limit_is_side_effect_free() {
        let factory = Factory::new("f", false);
        let mut m = mineral(8, 8);
        let err = factory.fracture_mineral(&mut m).unwrap_err();
        assert_eq!(
            err,
            ProcessingError::FractureLimitExceeded {
                mineral: m.id(),
                fractures: 8,
                limit: 8,
            }
        );
        assert_eq!(m.fractures(), 8);
    }

    #[test]
    fn test_fracture_zero_counter_stays_zero() {
        let factory = Factory::default();
        let mut m = mineral(0, 0);
        factory.fracture_mineral(&mut m).unwrap();
        assert_eq!(m.fractures(), 0);
    }

    #[test]
    fn test_fracture_near_u32_max_does_not_overflow() {
        let factory = Factory::default();
        let mut m = mineral(u32::MAX, u32::MAX);
        assert!(factory.fracture_mineral(&mut m).is_err());
        assert_eq!(m.fractures(), u32::MAX);
    }

    #[test]
    fn test_step_processes_ready_job() {
        let mut queue = JobQueue::new();
        let id = queue.add_job(ready_job(4, 8));

        let mut factory = Factory::default();
        let report = factory.step(&mut queue);

        let job = queue.get(id).unwrap();
        assert_eq!(job.status(), JobStatus::Finished);
        assert_eq!(job.mineral().fractures(), 8);
        assert_eq!(factory.current_job(), Some(id));

        let actions: Vec<StepAction> = report.records.iter().map(|r| r.action).collect();
        assert_eq!(
            actions,
            vec![
                StepAction::MarkStarted,
                StepAction::FractureMineral,
                StepAction::MarkFinished
            ]
        );
        assert_eq!(report.outcome, StepOutcome::Completed);
    }

    #[test]
    fn test_step_skips_non_ready_jobs() {
        let mut queue = JobQueue::new();
        let new_id = queue.add_job(Job::new("fracture", mineral(4, 8)));

        let mut factory = Factory::default();
        let report = factory.step(&mut queue);

        assert!(report.records.is_empty());
        assert_eq!(queue.get(new_id).unwrap().status(), JobStatus::New);
        assert_eq!(queue.get(new_id).unwrap().mineral().fractures(), 4);
    }

    #[test]
    fn test_step_aborts_on_first_failure() {
        let mut queue = JobQueue::new();
        let a = queue.add_job(ready_job(8, 8));
        let b = queue.add_job(ready_job(4, 8));

        let mut factory = Factory::default();
        let report = factory.step(&mut queue);

        let job_a = queue.get(a).unwrap();
        assert_eq!(job_a.status(), JobStatus::Started);
        assert_eq!(job_a.mineral().fractures(), 8);

        let job_b = queue.get(b).unwrap();
        assert_eq!(job_b.status(), JobStatus::Ready);
        assert_eq!(job_b.mineral().fractures(), 4);

        assert!(report.is_aborted());
        assert_eq!(report.errors().count(), 1);
    }

    #[test]
    fn test_stuck_job_is_never_retried() {
        let mut queue = JobQueue::new();
        let a = queue.add_job(ready_job(8, 8));
        let b = queue.add_job(ready_job(4, 8));

        let mut factory = Factory::default();
        factory.step(&mut queue);
        // A is no longer READY, so the next step reaches B
        let report = factory.step(&mut queue);

        assert_eq!(queue.get(a).unwrap().status(), JobStatus::Started);
        assert_eq!(queue.get(b).unwrap().status(), JobStatus::Finished);
        assert_eq!(report.outcome, StepOutcome::Completed);
    }

    #[test]
    fn test_inactive_factory_does_nothing() {
        let mut queue = JobQueue::new();
        let id = queue.add_job(ready_job(4, 8));

        let mut factory = Factory::new("f", false);
        let report = factory.step(&mut queue);

        assert_eq!(report.outcome, StepOutcome::Inactive);
        assert_eq!(queue.get(id).unwrap().status(), JobStatus::Ready);

        factory.activate();
        assert!(factory.is_active());
        factory.step(&mut queue);
        assert_eq!(queue.get(id).unwrap().status(), JobStatus::Finished);
    }
}
