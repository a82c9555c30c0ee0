use std::collections::BTreeMap;

use crate::calendar::CalendarDate;
use crate::plan::{DayPlan, MealType};

/// Decide whether an edited plan differs from its persisted baseline.
///
/// Days are matched by calendar date, never by list position, so
/// reordering the day list is not a change. For every date appearing on
/// either side, the three meal slots are compared by `recipe_id` alone
/// (a missing day counts as all-empty). Denormalized display fields are
/// derived from the recipe id and are ignored.
///
/// Used as a UI gate: "update" stays disabled while this returns false,
/// which also avoids redundant writes to the plan storage service.
pub fn has_changes(original: &[DayPlan], edited: &[DayPlan]) -> bool {
    let original_by_date = index_by_date(original);
    let edited_by_date = index_by_date(edited);

    let mut dates: Vec<CalendarDate> = original_by_date.keys().copied().collect();
    dates.extend(edited_by_date.keys().copied());
    dates.sort_unstable();
    dates.dedup();

    for date in dates {
        for meal_type in MealType::ALL {
            let before = recipe_at(&original_by_date, date, meal_type);
            let after = recipe_at(&edited_by_date, date, meal_type);
            if before != after {
                return true;
            }
        }
    }

    false
}

fn index_by_date(days: &[DayPlan]) -> BTreeMap<CalendarDate, &DayPlan> {
    days.iter().map(|day| (day.date, day)).collect()
}

fn recipe_at<'a>(
    by_date: &BTreeMap<CalendarDate, &'a DayPlan>,
    date: CalendarDate,
    meal_type: MealType,
) -> Option<&'a str> {
    by_date
        .get(&date)
        .and_then(|day| day.slot(meal_type).recipe_id.as_deref())
}
