use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::error::SchedulingError;

/// Date-only value with no time-of-day or timezone attached.
///
/// Every comparison and arithmetic step in this crate operates on the
/// year/month/day triple alone. Timestamps must go through [`normalize`]
/// before entering the engine so timezone drift can never shift a plan
/// by a day.
pub type CalendarDate = NaiveDate;

/// Number of days covered by one meal plan.
pub const PLAN_LENGTH_DAYS: usize = 7;

/// Radius of the reserved interval around an existing plan's start date.
///
/// A new plan may not start within `start ± FORBIDDEN_ZONE_DAYS` of any
/// existing plan. This keeps plans well separated, not merely
/// non-overlapping.
pub const FORBIDDEN_ZONE_DAYS: u64 = 6;

/// Single normalization point from a timestamp to a [`CalendarDate`].
pub fn normalize(instant: DateTime<Utc>) -> CalendarDate {
    instant.date_naive()
}

/// Parse an ISO `YYYY-MM-DD` date as exchanged with the plan storage service.
pub fn parse_calendar_date(s: &str) -> Result<CalendarDate, SchedulingError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| SchedulingError::InvalidDate(s.to_string()))
}

/// Generate the ordered window of 7 consecutive dates starting at `start`.
///
/// Total function: month and year rollover are handled by the date
/// arithmetic, so `plan_window(Dec 28)` runs into early January of the
/// next year.
pub fn plan_window(start: CalendarDate) -> [CalendarDate; PLAN_LENGTH_DAYS] {
    std::array::from_fn(|i| start + Days::new(i as u64))
}

/// Last date covered by a plan starting at `start` (day 7 of the window).
pub fn plan_end_date(start: CalendarDate) -> CalendarDate {
    start + Days::new((PLAN_LENGTH_DAYS - 1) as u64)
}

/// Earliest start date a user may pick: tomorrow relative to `today`.
///
/// `today` is supplied by the caller (read from the clock at the UI
/// boundary) so the engine stays a pure function of its arguments.
pub fn earliest_selectable(today: CalendarDate) -> CalendarDate {
    today + Days::new(1)
}
