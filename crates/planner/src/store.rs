use async_trait::async_trait;

use meal_scheduling::{
    CalendarDate, DayPlan, MealPlan, SchedulingError, has_any_recipe, has_changes,
    validate_start_date,
};

use crate::error::PlannerError;
use crate::session::PlanDraft;

/// The external plan storage collaborator (REST-like). The engine never
/// fetches or caches plans itself; every conflict check runs against the
/// snapshot returned by `list_plans_for_user`.
#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn list_plans_for_user(&self, user_id: &str) -> anyhow::Result<Vec<MealPlan>>;

    async fn create_plan(
        &self,
        user_id: &str,
        days: Vec<DayPlan>,
        start_date: CalendarDate,
    ) -> anyhow::Result<MealPlan>;

    async fn update_plan(&self, id: &str, days: Vec<DayPlan>) -> anyhow::Result<MealPlan>;

    async fn delete_plan(&self, id: &str) -> anyhow::Result<()>;
}

/// Persist a finished draft as a new plan.
///
/// Re-validates the start date against a fresh snapshot of the user's
/// plans (the draft may have been confirmed against a stale list) and
/// rejects a week with no recipe in any slot. Concurrent sessions racing
/// past the same snapshot remain the storage layer's problem.
pub async fn save_plan<S: PlanStore>(
    store: &S,
    user_id: &str,
    draft: &PlanDraft,
    today: CalendarDate,
) -> Result<MealPlan, PlannerError> {
    let start = draft.start_date().ok_or(SchedulingError::MissingStartDate)?;
    let days = draft.finalized_days()?;

    if !has_any_recipe(days) {
        return Err(SchedulingError::EmptyPlan.into());
    }

    let existing = store.list_plans_for_user(user_id).await?;
    validate_start_date(start, today, &existing, None)?;

    let plan = store.create_plan(user_id, days.to_vec(), start).await?;
    tracing::debug!(plan_id = %plan.id, start_date = %start, "meal plan created");
    Ok(plan)
}

/// Push slot edits of an existing plan to storage.
///
/// Completed plans reject edits, an all-empty week rejects persistence,
/// and an edit buffer identical to the persisted baseline is skipped
/// (returns `None`) instead of issuing a redundant write. Start dates are
/// immutable, so no conflict check runs here.
pub async fn apply_edits<S: PlanStore>(
    store: &S,
    original: &MealPlan,
    edited_days: &[DayPlan],
) -> Result<Option<MealPlan>, PlannerError> {
    if !original.is_editable() {
        return Err(SchedulingError::PlanCompleted(original.id.clone()).into());
    }

    if !has_changes(&original.days, edited_days) {
        tracing::debug!(plan_id = %original.id, "no slot changed, skipping update");
        return Ok(None);
    }

    if !has_any_recipe(edited_days) {
        return Err(SchedulingError::EmptyPlan.into());
    }

    let updated = store.update_plan(&original.id, edited_days.to_vec()).await?;
    tracing::debug!(plan_id = %updated.id, "meal plan updated");
    Ok(Some(updated))
}

/// Remove a plan from storage.
pub async fn delete_plan<S: PlanStore>(store: &S, plan_id: &str) -> Result<(), PlannerError> {
    store.delete_plan(plan_id).await?;
    tracing::debug!(plan_id = %plan_id, "meal plan deleted");
    Ok(())
}
