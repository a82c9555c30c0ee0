pub mod calendar;
pub mod conflict;
pub mod diff;
pub mod error;
pub mod materialize;
pub mod plan;

pub use calendar::{
    CalendarDate, FORBIDDEN_ZONE_DAYS, PLAN_LENGTH_DAYS, earliest_selectable, normalize,
    parse_calendar_date, plan_end_date, plan_window,
};
pub use conflict::{
    ConflictResult, DisableReason, ForbiddenZone, check_conflict, disable_reason,
    validate_start_date,
};
pub use diff::has_changes;
pub use error::SchedulingError;
pub use materialize::{DraftDay, empty_week, has_any_recipe, materialize};
pub use plan::{DayPlan, MealPlan, MealPlanStatus, MealSlot, MealType};
