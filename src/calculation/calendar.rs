//! Calendar utilities for a Monday-Saturday work week.
//!
//! This module answers "how many qualifying days fall in `[start, end]`" for
//! two predicates: ordinary workdays and paid holidays. A holiday that falls
//! on a Sunday is neither, so it is absent from both counts.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayEntry;

/// The distinct holiday dates used for day counting.
pub type HolidaySet = HashSet<NaiveDate>;

/// Reduces a holiday list to its distinct dates, ignoring names.
///
/// # Example
///
/// ```
/// use hr_cost::calculation::holiday_set;
/// use hr_cost::models::HolidayEntry;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let set = holiday_set(&[
///     HolidayEntry::new(day, "Tết Dương lịch"),
///     HolidayEntry::new(day, "New Year's Day"),
/// ]);
/// assert_eq!(set.len(), 1);
/// ```
pub fn holiday_set(holidays: &[HolidayEntry]) -> HolidaySet {
    holidays.iter().map(|h| h.date).collect()
}

/// Returns true if the date is Monday through Saturday.
///
/// # Example
///
/// ```
/// use hr_cost::calculation::is_workday;
/// use chrono::NaiveDate;
///
/// // 2026-01-03 is a Saturday, 2026-01-04 a Sunday
/// assert!(is_workday(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()));
/// assert!(!is_workday(NaiveDate::from_ymd_opt(2026, 1, 4).unwrap()));
/// ```
pub fn is_workday(date: NaiveDate) -> bool {
    date.weekday() != Weekday::Sun
}

fn days_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Counts the workdays in `[start, end]` that are not holidays.
///
/// Returns 0 when `start` is after `end`.
///
/// # Example
///
/// ```
/// use hr_cost::calculation::{count_workdays, HolidaySet};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// assert_eq!(count_workdays(start, end, &HolidaySet::new()), 27);
/// ```
pub fn count_workdays(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> u32 {
    days_in_range(start, end)
        .filter(|d| is_workday(*d) && !holidays.contains(d))
        .count() as u32
}

/// Counts the holidays in `[start, end]` that land on a workday.
///
/// Returns 0 when `start` is after `end`.
pub fn count_paid_holidays(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> u32 {
    days_in_range(start, end)
        .filter(|d| holidays.contains(d) && is_workday(*d))
        .count() as u32
}

/// Returns the first and last day of a calendar month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] if `month` is not in 1..=12 or the
/// year is outside the representable date range.
///
/// # Example
///
/// ```
/// use hr_cost::calculation::month_bounds;
/// use chrono::NaiveDate;
///
/// let (start, end) = month_bounds(2028, 2).unwrap();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2028, 2, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
/// ```
pub fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let invalid = || EngineError::InvalidMonth { year, month };

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(invalid)?;

    Ok((start, end))
}
