use serde::{Deserialize, Serialize};

use meal_scheduling::{
    CalendarDate, DayPlan, DraftDay, MealPlan, MealSlot, MealType, SchedulingError, empty_week,
    materialize, validate_start_date,
};

/// What the planner is currently showing. Owned by the caller as a plain
/// value; every transition is a function from one mode to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlannerMode {
    /// The user has no plan open. Initial mode when no plans exist.
    NoPlanSelected,
    /// A new plan is being authored and has not been persisted yet.
    Creating(PlanDraft),
    /// A persisted plan is open, identified by its storage id.
    Viewing { plan_id: String },
}

/// Editing buffer for a plan that does not exist in storage yet.
///
/// Suggested slots arrive date-less (from the upstream suggestion engine)
/// and are held as-is until a start date is confirmed; confirming binds
/// them to absolute dates. The manual path starts from no suggestions and
/// an all-empty week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDraft {
    suggested: Vec<DraftDay>,
    start_date: Option<CalendarDate>,
    days: Vec<DayPlan>,
}

impl PlanDraft {
    /// Manual creation: no upstream slot data, user fills slots after
    /// confirming a date.
    pub fn manual() -> Self {
        PlanDraft::default()
    }

    /// Suggestion-driven creation: hold the date-less week until the user
    /// confirms a start date.
    pub fn from_suggestions(suggested: Vec<DraftDay>) -> Self {
        PlanDraft {
            suggested,
            start_date: None,
            days: Vec::new(),
        }
    }

    pub fn start_date(&self) -> Option<CalendarDate> {
        self.start_date
    }

    /// Dated editing buffer; empty until a start date is confirmed.
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// Validate `start` against the existing plans and bind the draft to
    /// it. On success the suggested week (or an empty week) is
    /// materialized into the editing buffer.
    ///
    /// Re-confirming with a different date re-materializes from the
    /// original suggestions, discarding slot edits made under the
    /// previous date.
    pub fn confirm_start_date(
        &mut self,
        start: CalendarDate,
        today: CalendarDate,
        existing: &[MealPlan],
    ) -> Result<(), SchedulingError> {
        validate_start_date(start, today, existing, None)?;

        self.days = if self.suggested.is_empty() {
            empty_week(start)
        } else {
            materialize(&self.suggested, start)
        };
        self.start_date = Some(start);
        Ok(())
    }

    /// Assign or clear one slot in the editing buffer. Dates outside the
    /// confirmed window are ignored.
    pub fn set_slot(&mut self, date: CalendarDate, meal_type: MealType, slot: MealSlot) {
        if let Some(day) = self.days.iter_mut().find(|day| day.date == date) {
            *day.slot_mut(meal_type) = slot;
        }
    }

    /// The dated week to persist. Fails while no start date is confirmed.
    pub fn finalized_days(&self) -> Result<&[DayPlan], SchedulingError> {
        if self.start_date.is_none() {
            return Err(SchedulingError::MissingStartDate);
        }
        Ok(&self.days)
    }
}

/// Mode to open the planner in, given the user's plans: the
/// earliest-starting pending plan, else the earliest plan overall, else
/// nothing selected.
pub fn initial_mode(plans: &[MealPlan]) -> PlannerMode {
    let earliest_pending = plans
        .iter()
        .filter(|plan| plan.is_editable())
        .min_by_key(|plan| plan.start_date);
    let earliest = earliest_pending.or_else(|| plans.iter().min_by_key(|plan| plan.start_date));

    match earliest {
        Some(plan) => PlannerMode::Viewing {
            plan_id: plan.id.clone(),
        },
        None => PlannerMode::NoPlanSelected,
    }
}

/// Abandon an in-progress draft: back to the previously viewed plan when
/// one exists.
pub fn mode_after_cancel(plans: &[MealPlan]) -> PlannerMode {
    initial_mode(plans)
}

/// Mode after deleting a plan, given the remaining plans.
pub fn mode_after_delete(remaining: &[MealPlan]) -> PlannerMode {
    initial_mode(remaining)
}
