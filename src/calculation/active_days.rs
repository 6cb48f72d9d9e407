//! Actual paid days within the employee's active range.
//!
//! The active range of a month is the intersection of the employment range
//! with the calendar month. An empty intersection yields zero paid days.

use chrono::NaiveDate;

use super::calendar::{HolidaySet, count_paid_holidays, count_workdays};

/// Paid day counts for the employee's active part of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDays {
    /// `max(employment start, month start)`.
    pub calc_start: NaiveDate,
    /// `min(employment end, month end)`.
    pub calc_end: NaiveDate,
    /// Whether `calc_start <= calc_end`.
    pub active: bool,
    /// Workdays within the active range.
    pub paid_workdays: u32,
    /// Paid holidays within the active range.
    pub paid_holidays: u32,
    /// (I) Actual paid days.
    pub actual_paid_days: u32,
}

/// Calculates the actual paid days of the month for an employment range.
///
/// # Example
///
/// ```
/// use hr_cost::calculation::{calculate_active_days, HolidaySet};
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
///
/// // Employed only in February, queried for January
/// let days = calculate_active_days(d(2, 1), d(2, 28), d(1, 1), d(1, 31), &HolidaySet::new());
/// assert!(!days.active);
/// assert_eq!(days.actual_paid_days, 0);
/// ```
pub fn calculate_active_days(
    employment_start: NaiveDate,
    employment_end: NaiveDate,
    month_start: NaiveDate,
    month_end: NaiveDate,
    holidays: &HolidaySet,
) -> ActiveDays {
    let calc_start = employment_start.max(month_start);
    let calc_end = employment_end.min(month_end);

    if calc_start > calc_end {
        return ActiveDays {
            calc_start,
            calc_end,
            active: false,
            paid_workdays: 0,
            paid_holidays: 0,
            actual_paid_days: 0,
        };
    }

    let paid_workdays = count_workdays(calc_start, calc_end, holidays);
    let paid_holidays = count_paid_holidays(calc_start, calc_end, holidays);

    ActiveDays {
        calc_start,
        calc_end,
        active: true,
        paid_workdays,
        paid_holidays,
        actual_paid_days: paid_workdays + paid_holidays,
    }
}
