use crate::core::jobs::job::{Job, JobStatus};
use crate::core::types::JobId;
use std::collections::BTreeMap;

/// Append-only, insertion-ordered collection of jobs.
///
/// Both drivers walk it front to back every tick; jobs are never removed.
#[derive(Debug, Default)]
pub struct JobQueue {
    jobs: Vec<Job>,
}

impl JobQueue {
    pub fn new() -> Self {
        Self { jobs: Vec::new() }
    }

    /// Append a job to the back of the queue, returning its ID
    pub fn add_job(&mut self, job: Job) -> JobId {
        let id = job.id();
        self.jobs.push(job);
        id
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Job> {
        self.jobs.iter_mut()
    }

    /// Find a job by ID
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id() == id)
    }

    /// Number of jobs currently in each status. Every status is present.
    pub fn status_counts(&self) -> BTreeMap<JobStatus, usize> {
        let mut counts: BTreeMap<JobStatus, usize> =
            JobStatus::ALL.iter().map(|status| (*status, 0)).collect();
        for job in &self.jobs {
            *counts.entry(job.status()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a JobQueue {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}

impl<'a> IntoIterator for &'a mut JobQueue {
    type Item = &'a mut Job;
    type IntoIter = std::slice::IterMut<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter_mut()
    }
}
