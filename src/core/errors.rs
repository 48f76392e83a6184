use super::jobs::job::JobStatus;
use super::types::{JobId, MineralId};

/// Recoverable failures raised while driving jobs through the pipeline
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessingError {
    /// A status transition was requested from the wrong state
    #[error("job {job}: cannot move to {to} from {from}")]
    InvalidTransition {
        job: JobId,
        from: JobStatus,
        to: JobStatus,
    },
    /// Doubling the fracture counter would pass the type's limit
    #[error("mineral {mineral}: doubling {fractures} fractures exceeds limit {limit}")]
    FractureLimitExceeded {
        mineral: MineralId,
        fractures: u32,
        limit: u32,
    },
}

impl ProcessingError {
    /// Short name of the error kind, used as the prefix of driver error logs
    pub fn kind(&self) -> &'static str {
        match self {
            ProcessingError::InvalidTransition { .. } => "InvalidTransition",
            ProcessingError::FractureLimitExceeded { .. } => "FractureLimitExceeded",
        }
    }
}
