use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use meal_planner::PlanStore;
use meal_scheduling::{CalendarDate, DayPlan, MealPlan, MealPlanStatus};

/// Stand-in for the external plan storage service, backed by a map.
/// Assigns sequential ids and snapshots like the real service would.
#[derive(Default)]
pub struct InMemoryPlanStore {
    plans: Mutex<HashMap<String, MealPlan>>,
    next_id: AtomicU32,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<MealPlan> {
        self.plans.lock().unwrap().get(id).cloned()
    }

    pub fn mark_completed(&self, id: &str) {
        if let Some(plan) = self.plans.lock().unwrap().get_mut(id) {
            plan.status = MealPlanStatus::Completed;
        }
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn list_plans_for_user(&self, user_id: &str) -> anyhow::Result<Vec<MealPlan>> {
        let mut plans: Vec<MealPlan> = self
            .plans
            .lock()
            .unwrap()
            .values()
            .filter(|plan| plan.user_id == user_id)
            .cloned()
            .collect();
        plans.sort_by_key(|plan| plan.start_date);
        Ok(plans)
    }

    async fn create_plan(
        &self,
        user_id: &str,
        days: Vec<DayPlan>,
        start_date: CalendarDate,
    ) -> anyhow::Result<MealPlan> {
        let id = format!("plan-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let plan = MealPlan {
            id: id.clone(),
            user_id: user_id.to_string(),
            start_date,
            status: MealPlanStatus::Pending,
            days,
        };
        self.plans.lock().unwrap().insert(id, plan.clone());
        Ok(plan)
    }

    async fn update_plan(&self, id: &str, days: Vec<DayPlan>) -> anyhow::Result<MealPlan> {
        let mut plans = self.plans.lock().unwrap();
        let plan = plans
            .get_mut(id)
            .ok_or_else(|| anyhow::anyhow!("plan not found: {id}"))?;
        plan.days = days;
        Ok(plan.clone())
    }

    async fn delete_plan(&self, id: &str) -> anyhow::Result<()> {
        self.plans
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| anyhow::anyhow!("plan not found: {id}"))
    }
}
