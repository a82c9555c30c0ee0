use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarDate, FORBIDDEN_ZONE_DAYS, earliest_selectable};
use crate::error::SchedulingError;
use crate::plan::MealPlan;

/// Closed interval `[start - 6, start + 6]` around an existing plan's
/// start date. No new plan may start inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenZone {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl ForbiddenZone {
    pub fn around(plan_start: CalendarDate) -> Self {
        ForbiddenZone {
            start: plan_start - Days::new(FORBIDDEN_ZONE_DAYS),
            end: plan_start + Days::new(FORBIDDEN_ZONE_DAYS),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Outcome of checking a candidate start date against existing plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictResult {
    NoConflict,
    Conflict {
        with_plan_id: String,
        forbidden_start: CalendarDate,
        forbidden_end: CalendarDate,
    },
}

impl ConflictResult {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ConflictResult::Conflict { .. })
    }
}

/// Why a calendar day is not offered as a valid plan start in the date
/// picker. Past-date and forbidden-zone disablement are distinct reasons
/// so the UI can explain each one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisableReason {
    PastDate,
    ForbiddenZone { with_plan_id: String },
}

/// Check a candidate start date against every existing plan's forbidden
/// zone. Reports the first conflicting plan in iteration order; any
/// conflict is fatal, so one is enough.
///
/// Pure function of its arguments. The past-date rule is a separate check,
/// see [`validate_start_date`].
pub fn check_conflict(candidate: CalendarDate, existing: &[MealPlan]) -> ConflictResult {
    for plan in existing {
        let zone = ForbiddenZone::around(plan.start_date);
        if zone.contains(candidate) {
            return ConflictResult::Conflict {
                with_plan_id: plan.id.clone(),
                forbidden_start: zone.start,
                forbidden_end: zone.end,
            };
        }
    }
    ConflictResult::NoConflict
}

/// Full start-date validation: the past-date rule, then the forbidden-zone
/// rule against every existing plan.
///
/// `exclude_plan_id` names the plan currently being edited, if any, so a
/// pure slot edit never conflicts with the plan's own start date.
pub fn validate_start_date(
    candidate: CalendarDate,
    today: CalendarDate,
    existing: &[MealPlan],
    exclude_plan_id: Option<&str>,
) -> Result<(), SchedulingError> {
    let earliest = earliest_selectable(today);
    if candidate < earliest {
        return Err(SchedulingError::PastDate { candidate, earliest });
    }

    for plan in existing {
        if exclude_plan_id == Some(plan.id.as_str()) {
            continue;
        }
        let zone = ForbiddenZone::around(plan.start_date);
        if zone.contains(candidate) {
            return Err(SchedulingError::ForbiddenZone {
                with_plan_id: plan.id.clone(),
                forbidden_start: zone.start,
                forbidden_end: zone.end,
            });
        }
    }

    Ok(())
}

/// Date-picker helper: `None` means the day is selectable as a plan start.
pub fn disable_reason(
    date: CalendarDate,
    today: CalendarDate,
    existing: &[MealPlan],
) -> Option<DisableReason> {
    match validate_start_date(date, today, existing, None) {
        Ok(()) => None,
        Err(SchedulingError::PastDate { .. }) => Some(DisableReason::PastDate),
        Err(SchedulingError::ForbiddenZone { with_plan_id, .. }) => {
            Some(DisableReason::ForbiddenZone { with_plan_id })
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::MealPlanStatus;
    use chrono::NaiveDate;

    fn plan_starting(id: &str, year: i32, month: u32, day: u32) -> MealPlan {
        MealPlan {
            id: id.to_string(),
            user_id: "u-1".to_string(),
            start_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            status: MealPlanStatus::Pending,
            days: Vec::new(),
        }
    }

    #[test]
    fn test_plan_conflicts_with_its_own_start_date() {
        let plan = plan_starting("p-1", 2025, 3, 10);
        let result = check_conflict(plan.start_date, &[plan]);
        assert!(result.is_conflict());
    }

    #[test]
    fn test_forbidden_zone_bounds_are_inclusive() {
        let plan = plan_starting("p-1", 2025, 3, 10);
        let start = plan.start_date;
        let plans = [plan];

        assert!(check_conflict(start - Days::new(6), &plans).is_conflict());
        assert!(check_conflict(start + Days::new(6), &plans).is_conflict());
        assert!(!check_conflict(start - Days::new(7), &plans).is_conflict());
        assert!(!check_conflict(start + Days::new(7), &plans).is_conflict());
    }

    #[test]
    fn test_conflict_reports_zone_and_plan_id() {
        let plan = plan_starting("p-1", 2025, 3, 10);
        let candidate = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();

        match check_conflict(candidate, &[plan]) {
            ConflictResult::Conflict {
                with_plan_id,
                forbidden_start,
                forbidden_end,
            } => {
                assert_eq!(with_plan_id, "p-1");
                assert_eq!(forbidden_start, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
                assert_eq!(forbidden_end, NaiveDate::from_ymd_opt(2025, 3, 16).unwrap());
            }
            ConflictResult::NoConflict => panic!("expected a conflict"),
        }
    }

    #[test]
    fn test_first_matching_plan_wins() {
        let first = plan_starting("p-1", 2025, 3, 10);
        let second = plan_starting("p-2", 2025, 3, 12);
        let candidate = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();

        match check_conflict(candidate, &[first, second]) {
            ConflictResult::Conflict { with_plan_id, .. } => assert_eq!(with_plan_id, "p-1"),
            ConflictResult::NoConflict => panic!("expected a conflict"),
        }
    }

    #[test]
    fn test_validate_rejects_today_and_earlier_as_past() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        let err = validate_start_date(today, today, &[], None).unwrap_err();
        assert_eq!(
            err,
            SchedulingError::PastDate {
                candidate: today,
                earliest: today + Days::new(1),
            }
        );
        assert!(validate_start_date(today + Days::new(1), today, &[], None).is_ok());
    }

    #[test]
    fn test_past_date_reported_before_conflict() {
        // Yesterday is both past and inside the zone; past wins as the reason.
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let plan = plan_starting("p-1", 2025, 3, 10);

        let err = validate_start_date(today - Days::new(1), today, &[plan], None).unwrap_err();
        assert!(matches!(err, SchedulingError::PastDate { .. }));
    }

    #[test]
    fn test_editing_a_plan_skips_its_own_zone() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let plan = plan_starting("p-1", 2025, 3, 10);
        let other = plan_starting("p-2", 2025, 3, 24);

        assert!(validate_start_date(plan.start_date, today, &[plan.clone()], Some("p-1")).is_ok());
        // Exclusion only applies to the named plan.
        let err = validate_start_date(
            NaiveDate::from_ymd_opt(2025, 3, 22).unwrap(),
            today,
            &[plan, other],
            Some("p-1"),
        )
        .unwrap_err();
        assert!(matches!(err, SchedulingError::ForbiddenZone { ref with_plan_id, .. } if with_plan_id == "p-2"));
    }

    #[test]
    fn test_disable_reason_distinguishes_past_from_zone() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let plan = plan_starting("p-1", 2025, 3, 20);
        let plans = [plan];

        assert_eq!(
            disable_reason(today, today, &plans),
            Some(DisableReason::PastDate)
        );
        assert_eq!(
            disable_reason(NaiveDate::from_ymd_opt(2025, 3, 18).unwrap(), today, &plans),
            Some(DisableReason::ForbiddenZone {
                with_plan_id: "p-1".to_string()
            })
        );
        assert_eq!(
            disable_reason(NaiveDate::from_ymd_opt(2025, 3, 27).unwrap(), today, &plans),
            None
        );
    }
}
