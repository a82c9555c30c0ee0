use meal_scheduling::SchedulingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    /// Expected validation outcome from the scheduling engine, rendered to
    /// the user as an explanation rather than a failure.
    #[error(transparent)]
    Validation(#[from] SchedulingError),

    /// Failure from the external plan storage collaborator (network,
    /// serialization, server-side rejection). Retry policy lives there,
    /// not here.
    #[error("plan storage error: {0}")]
    Store(#[from] anyhow::Error),
}
