//! Holiday calendar model.
//!
//! This module contains the [`HolidayEntry`] type that makes up a holiday
//! calendar for a year.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a single public holiday in a holiday calendar.
///
/// Holiday lists may contain the same date more than once (for example when
/// two sources are merged). Consumers that count days reduce the list to its
/// distinct dates, so duplicates never double-count.
///
/// # Example
///
/// ```
/// use hr_cost::models::HolidayEntry;
/// use chrono::NaiveDate;
///
/// let holiday = HolidayEntry {
///     date: NaiveDate::from_ymd_opt(2026, 9, 2).unwrap(),
///     name: "Quốc khánh".to_string(),
/// };
/// assert_eq!(holiday, HolidayEntry::new(holiday.date, "Quốc khánh"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The display name of the holiday. May be empty.
    #[serde(default)]
    pub name: String,
}

impl HolidayEntry {
    /// Creates a new holiday entry.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}
