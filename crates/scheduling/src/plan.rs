use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarDate, plan_end_date};
use crate::error::SchedulingError;

/// The three meal periods of one planned day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Morning,
    Noon,
    Evening,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Morning, MealType::Noon, MealType::Evening];

    pub fn as_str(&self) -> &str {
        match self {
            MealType::Morning => "morning",
            MealType::Noon => "noon",
            MealType::Evening => "evening",
        }
    }

    pub fn parse(s: &str) -> Result<Self, SchedulingError> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(MealType::Morning),
            "noon" => Ok(MealType::Noon),
            "evening" => Ok(MealType::Evening),
            _ => Err(SchedulingError::InvalidMealType(s.to_string())),
        }
    }
}

/// Assignment of a recipe to one meal period.
///
/// `recipe_id` references the external recipe catalog; `None` means the
/// slot is unplanned. Name and image are denormalized display copies and
/// never authoritative — change detection ignores them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlot {
    pub recipe_id: Option<String>,
    pub recipe_name: Option<String>,
    pub recipe_image: Option<String>,
}

impl MealSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_recipe(
        recipe_id: impl Into<String>,
        recipe_name: impl Into<String>,
        recipe_image: impl Into<String>,
    ) -> Self {
        MealSlot {
            recipe_id: Some(recipe_id.into()),
            recipe_name: Some(recipe_name.into()),
            recipe_image: Some(recipe_image.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recipe_id.is_none()
    }
}

/// One calendar date plus its morning/noon/evening assignments.
///
/// A day whose three slots are all empty is equivalent to "no plan for
/// that day" and may be omitted from persisted storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: CalendarDate,
    pub morning: MealSlot,
    pub noon: MealSlot,
    pub evening: MealSlot,
}

impl DayPlan {
    pub fn empty(date: CalendarDate) -> Self {
        DayPlan {
            date,
            morning: MealSlot::empty(),
            noon: MealSlot::empty(),
            evening: MealSlot::empty(),
        }
    }

    pub fn slot(&self, meal_type: MealType) -> &MealSlot {
        match meal_type {
            MealType::Morning => &self.morning,
            MealType::Noon => &self.noon,
            MealType::Evening => &self.evening,
        }
    }

    pub fn slot_mut(&mut self, meal_type: MealType) -> &mut MealSlot {
        match meal_type {
            MealType::Morning => &mut self.morning,
            MealType::Noon => &mut self.noon,
            MealType::Evening => &mut self.evening,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.noon.is_empty() && self.evening.is_empty()
    }
}

/// Lifecycle status of a meal plan. Only `Pending` plans accept edits;
/// the transition to `Completed` is driven outside this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPlanStatus {
    #[default]
    Pending,
    Completed,
}

impl MealPlanStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MealPlanStatus::Pending => "pending",
            MealPlanStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Result<Self, SchedulingError> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(MealPlanStatus::Pending),
            "completed" => Ok(MealPlanStatus::Completed),
            _ => Err(SchedulingError::InvalidStatus(s.to_string())),
        }
    }
}

/// A 7-day plan as persisted by the external plan storage service.
///
/// `start_date` is immutable once created: moving a plan to another week
/// means deleting it and creating a new one, so the forbidden-zone check
/// never has to reason about in-place date changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: String,
    pub user_id: String,
    pub start_date: CalendarDate,
    pub status: MealPlanStatus,
    pub days: Vec<DayPlan>,
}

impl MealPlan {
    /// Derived last covered date, `start_date + 6` days.
    pub fn end_date(&self) -> NaiveDate {
        plan_end_date(self.start_date)
    }

    pub fn is_editable(&self) -> bool {
        self.status == MealPlanStatus::Pending
    }
}
