//! Daily rate and salary cost split.
//!
//! The gross monthly salary is divided over the month's standard paid days
//! (H) to give a daily rate (K). The rate then prices worked days, accrued
//! leave and paid holidays separately. The salary total (O) is priced from
//! the actual paid days directly rather than summed from the split.

use rust_decimal::Decimal;

use crate::error::EngineResult;

use super::active_days::ActiveDays;
use super::amount::checked_product;

/// The salary cost split for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBreakdown {
    /// (K) Rate per paid day. Zero when there are no standard paid days.
    pub daily_rate: Decimal,
    /// (L) `max(0, paid workdays - J) x K`.
    pub work_cost: Decimal,
    /// (M) `J x K`.
    pub leave_cost: Decimal,
    /// (N) `paid holidays x K`.
    pub holiday_cost: Decimal,
    /// (O) `I x K`.
    pub total_salary: Decimal,
}

/// Returns the rate per paid day, guarding a zero divisor.
pub fn daily_rate(gross_monthly: Decimal, standard_paid_days: u32) -> Decimal {
    if standard_paid_days == 0 {
        Decimal::ZERO
    } else {
        gross_monthly / Decimal::from(standard_paid_days)
    }
}

/// Splits the month's salary into work, leave and holiday cost.
///
/// # Arguments
///
/// * `gross_monthly` - Gross monthly salary
/// * `standard_paid_days` - H, the divisor for the daily rate
/// * `active` - Paid days in the employee's active range
/// * `leave_days` - J, accrued leave days
///
/// # Errors
///
/// Returns [`crate::error::EngineError::AmountOutOfRange`] if a priced
/// quantity does not fit in a `Decimal`.
///
/// # Example
///
/// ```
/// use hr_cost::calculation::{calculate_active_days, calculate_salary, HolidaySet};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
/// let active = calculate_active_days(d(1), d(31), d(1), d(31), &HolidaySet::new());
///
/// let salary = calculate_salary(Decimal::new(2_700_000, 0), 27, &active, Decimal::ONE).unwrap();
/// assert_eq!(salary.daily_rate, Decimal::new(100_000, 0));
/// assert_eq!(salary.work_cost, Decimal::new(2_600_000, 0));
/// assert_eq!(salary.total_salary, Decimal::new(2_700_000, 0));
/// ```
pub fn calculate_salary(
    gross_monthly: Decimal,
    standard_paid_days: u32,
    active: &ActiveDays,
    leave_days: Decimal,
) -> EngineResult<SalaryBreakdown> {
    let daily_rate = daily_rate(gross_monthly, standard_paid_days);

    let worked_days = (Decimal::from(active.paid_workdays) - leave_days).max(Decimal::ZERO);

    Ok(SalaryBreakdown {
        daily_rate,
        work_cost: checked_product(worked_days, daily_rate, "work cost (L)")?,
        leave_cost: checked_product(leave_days, daily_rate, "leave cost (M)")?,
        holiday_cost: checked_product(
            Decimal::from(active.paid_holidays),
            daily_rate,
            "holiday cost (N)",
        )?,
        total_salary: checked_product(
            Decimal::from(active.actual_paid_days),
            daily_rate,
            "total salary (O)",
        )?,
    })
}
