//! Monthly cost result models.
//!
//! This module contains [`MonthResult`], the per-month record produced by the
//! calculation engine, and [`YearTotals`], the aggregate over a year of records.
//!
//! Field documentation carries the letter each quantity has in the payroll
//! worksheet (F through Q) so exported sheets and records line up.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::checked_total;
use crate::error::EngineResult;

/// The full cost breakdown for one calendar month.
///
/// Every intermediate quantity of the calculation is kept so a result can be
/// audited line by line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthResult {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// First day of the month.
    pub month_start: NaiveDate,
    /// Last day of the month.
    pub month_end: NaiveDate,
    /// Start of the employee's active sub-range within the month.
    pub calc_start: NaiveDate,
    /// End of the employee's active sub-range within the month.
    ///
    /// When the employee is inactive this is before `calc_start`.
    pub calc_end: NaiveDate,
    /// Whether the employment range intersects this month.
    pub active: bool,
    /// (F) Standard working days in the calendar month.
    pub standard_workdays: u32,
    /// (G) Holidays landing on a workday within the month.
    pub standard_holidays: u32,
    /// (H) Standard paid days, F + G.
    pub standard_paid_days: u32,
    /// Workdays within the active sub-range.
    pub paid_workdays: u32,
    /// Paid holidays within the active sub-range.
    pub paid_holidays: u32,
    /// (I) Actual paid days, paid workdays + paid holidays.
    pub actual_paid_days: u32,
    /// (J) Leave days accrued this month.
    pub leave_days: Decimal,
    /// Presence ratio I / F, clamped to [0, 1].
    pub leave_ratio: Decimal,
    /// Annual leave entitlement divided by 12.
    pub monthly_accrual: Decimal,
    /// (K) Rate per paid day.
    pub daily_rate: Decimal,
    /// (L) Cost of days actually worked.
    pub work_cost: Decimal,
    /// (M) Cost of accrued leave.
    pub leave_cost: Decimal,
    /// (N) Cost of paid holidays.
    pub holiday_cost: Decimal,
    /// (O) Total salary, I x K.
    pub total_salary: Decimal,
    /// (P) Employer insurance contribution.
    pub employer_insurance: Decimal,
    /// (Q) Total company cost, O + P + M + N.
    pub total_cost: Decimal,
}

/// Aggregated money totals over a sequence of month results.
///
/// # Example
///
/// ```
/// use hr_cost::models::YearTotals;
///
/// let totals = YearTotals::from_months(&[]).unwrap();
/// assert!(totals.total_cost.is_zero());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearTotals {
    /// Sum of L.
    pub work_cost: Decimal,
    /// Sum of M.
    pub leave_cost: Decimal,
    /// Sum of N.
    pub holiday_cost: Decimal,
    /// Sum of O.
    pub total_salary: Decimal,
    /// Sum of P.
    pub employer_insurance: Decimal,
    /// Sum of Q.
    pub total_cost: Decimal,
}

impl YearTotals {
    /// Sums the money fields of the given month results.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::AmountOutOfRange`] if a sum does
    /// not fit in a `Decimal`.
    pub fn from_months(months: &[MonthResult]) -> EngineResult<Self> {
        let sum = |field: fn(&MonthResult) -> Decimal, quantity| {
            checked_total(months.iter().map(field), quantity)
        };

        Ok(Self {
            work_cost: sum(|m| m.work_cost, "yearly work cost")?,
            leave_cost: sum(|m| m.leave_cost, "yearly leave cost")?,
            holiday_cost: sum(|m| m.holiday_cost, "yearly holiday cost")?,
            total_salary: sum(|m| m.total_salary, "yearly total salary")?,
            employer_insurance: sum(|m| m.employer_insurance, "yearly employer insurance")?,
            total_cost: sum(|m| m.total_cost, "yearly total cost")?,
        })
    }
}
