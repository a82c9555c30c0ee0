use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarDate, plan_window};
use crate::plan::{DayPlan, MealSlot};

/// One day's worth of meal assignments with no date attached yet.
///
/// This is the shape produced upstream (a suggestion engine, or nothing at
/// all for the manual path) before the user has confirmed a start date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftDay {
    pub morning: MealSlot,
    pub noon: MealSlot,
    pub evening: MealSlot,
}

/// Bind date-less draft days to absolute dates from a confirmed start.
///
/// Day `i` of the result gets date `start + i` and its slots copied
/// verbatim from `draft_days[i]`. The result always covers the full 7-day
/// window: days with no corresponding draft entry come back all-empty.
/// Entries past day 7 are outside the upstream contract and ignored.
///
/// Conflict checking is not repeated here; `start` is assumed to have
/// already passed [`crate::validate_start_date`].
pub fn materialize(draft_days: &[DraftDay], start: CalendarDate) -> Vec<DayPlan> {
    plan_window(start)
        .into_iter()
        .enumerate()
        .map(|(i, date)| match draft_days.get(i) {
            Some(draft) => DayPlan {
                date,
                morning: draft.morning.clone(),
                noon: draft.noon.clone(),
                evening: draft.evening.clone(),
            },
            None => DayPlan::empty(date),
        })
        .collect()
}

/// Manual-creation path: one empty DayPlan per date in the window, ready
/// for the user to fill in slot by slot.
pub fn empty_week(start: CalendarDate) -> Vec<DayPlan> {
    materialize(&[], start)
}

/// Save-routine gate: a plan may only be persisted when at least one slot
/// holds a recipe.
pub fn has_any_recipe(days: &[DayPlan]) -> bool {
    days.iter().any(|day| !day.is_empty())
}
