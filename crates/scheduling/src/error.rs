use chrono::NaiveDate;
use thiserror::Error;

/// Validation outcomes surfaced to the UI layer as values, never panics.
///
/// Storage/network failures are not represented here; they belong to the
/// external plan storage collaborator and propagate as its own error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("start date {candidate} is already past; earliest selectable date is {earliest}")]
    PastDate {
        candidate: NaiveDate,
        earliest: NaiveDate,
    },

    #[error(
        "start date falls inside the reserved window {forbidden_start} to {forbidden_end} around plan {with_plan_id}"
    )]
    ForbiddenZone {
        with_plan_id: String,
        forbidden_start: NaiveDate,
        forbidden_end: NaiveDate,
    },

    #[error("meal plan has no recipe assigned to any slot")]
    EmptyPlan,

    #[error("no start date has been confirmed for the plan being created")]
    MissingStartDate,

    #[error("meal plan not found: {0}")]
    PlanNotFound(String),

    #[error("meal plan {0} is completed and can no longer be edited")]
    PlanCompleted(String),

    #[error("invalid meal type: {0}")]
    InvalidMealType(String),

    #[error("invalid meal plan status: {0}")]
    InvalidStatus(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),
}
