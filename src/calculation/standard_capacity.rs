//! Standard monthly capacity.
//!
//! The standard capacity of a month depends only on the calendar and the
//! holiday set, never on the employee's active range. Its paid-day total is
//! the divisor of the daily rate.

use chrono::NaiveDate;

use super::calendar::{HolidaySet, count_paid_holidays, count_workdays};

/// Standard day counts for a full calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardCapacity {
    /// (F) Working days in the month, holidays excluded.
    pub standard_workdays: u32,
    /// (G) Holidays that land on a workday.
    pub standard_holidays: u32,
    /// (H) Standard paid days, F + G.
    pub standard_paid_days: u32,
}

/// Calculates the standard capacity of the month `[month_start, month_end]`.
///
/// # Example
///
/// ```
/// use hr_cost::calculation::{calculate_standard_capacity, HolidaySet};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// let holidays: HolidaySet = [NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()].into();
///
/// let capacity = calculate_standard_capacity(start, end, &holidays);
/// assert_eq!(capacity.standard_workdays, 26);
/// assert_eq!(capacity.standard_holidays, 1);
/// assert_eq!(capacity.standard_paid_days, 27);
/// ```
pub fn calculate_standard_capacity(
    month_start: NaiveDate,
    month_end: NaiveDate,
    holidays: &HolidaySet,
) -> StandardCapacity {
    let standard_workdays = count_workdays(month_start, month_end, holidays);
    let standard_holidays = count_paid_holidays(month_start, month_end, holidays);

    StandardCapacity {
        standard_workdays,
        standard_holidays,
        standard_paid_days: standard_workdays + standard_holidays,
    }
}
