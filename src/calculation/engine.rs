//! The monthly payroll cost engine.
//!
//! [`CalculationEngine`] owns the calculation inputs and the holiday calendar
//! and runs the per-month pipeline: standard capacity, active days, leave
//! accrual, salary split, employer insurance and total company cost.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{CalculationInputs, HolidayEntry, MonthResult, YearTotals};

use super::active_days::calculate_active_days;
use super::amount::checked_total;
use super::calendar::{HolidaySet, holiday_set, month_bounds};
use super::insurance::calculate_employer_insurance;
use super::leave_accrual::calculate_leave_accrual;
use super::salary::calculate_salary;
use super::standard_capacity::calculate_standard_capacity;

/// Total company cost, `O + P + M + N`.
///
/// Leave and holiday cost are already part of the salary total and are
/// charged again as an overhead line. This is the company's costing policy.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::AmountOutOfRange`] if the sum does
/// not fit in a `Decimal`.
pub fn total_company_cost(
    total_salary: Decimal,
    employer_insurance: Decimal,
    leave_cost: Decimal,
    holiday_cost: Decimal,
) -> EngineResult<Decimal> {
    checked_total(
        [total_salary, employer_insurance, leave_cost, holiday_cost],
        "total company cost (Q)",
    )
}

/// Computes monthly cost records for one employee.
///
/// The engine is immutable after construction; every month is derived fresh
/// from the inputs and the holiday calendar.
///
/// # Example
///
/// ```
/// use hr_cost::calculation::CalculationEngine;
/// use hr_cost::models::CalculationInputs;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let inputs = CalculationInputs::new(
///     Decimal::new(20_000_000, 0),
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
/// );
/// let engine = CalculationEngine::new(inputs, vec![]).unwrap();
///
/// let january = engine.calculate_month(2026, 1).unwrap();
/// assert_eq!(january.standard_workdays, 27);
/// assert_eq!(january.leave_days, Decimal::ONE);
///
/// let year = engine.calculate_year(2026).unwrap();
/// assert_eq!(year.len(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct CalculationEngine {
    inputs: CalculationInputs,
    holidays: Vec<HolidayEntry>,
    holiday_dates: HolidaySet,
}

impl CalculationEngine {
    /// Creates an engine for the given inputs and holiday calendar.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidDateRange`] if the
    /// employment start date is after the end date. No month is computed
    /// for invalid inputs.
    pub fn new(inputs: CalculationInputs, holidays: Vec<HolidayEntry>) -> EngineResult<Self> {
        inputs.validate()?;

        let holiday_dates = holiday_set(&holidays);
        debug!(
            start_date = %inputs.start_date,
            end_date = %inputs.end_date,
            holidays = holidays.len(),
            distinct_holiday_dates = holiday_dates.len(),
            "Calculation engine created"
        );

        Ok(Self {
            inputs,
            holidays,
            holiday_dates,
        })
    }

    /// Returns the calculation inputs.
    pub fn inputs(&self) -> &CalculationInputs {
        &self.inputs
    }

    /// Returns the holiday calendar as supplied.
    pub fn holidays(&self) -> &[HolidayEntry] {
        &self.holidays
    }

    /// Calculates the cost record for one calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidMonth`] if `month` is not
    /// in 1..=12, and [`crate::error::EngineError::AmountOutOfRange`] if the
    /// inputs price a quantity beyond the `Decimal` range.
    pub fn calculate_month(&self, year: i32, month: u32) -> EngineResult<MonthResult> {
        let (month_start, month_end) = month_bounds(year, month)?;

        let capacity = calculate_standard_capacity(month_start, month_end, &self.holiday_dates);

        let active = calculate_active_days(
            self.inputs.start_date,
            self.inputs.end_date,
            month_start,
            month_end,
            &self.holiday_dates,
        );

        let leave = calculate_leave_accrual(
            self.inputs.annual_leave_days,
            capacity.standard_workdays,
            active.actual_paid_days,
            active.paid_workdays,
        );

        let salary = calculate_salary(
            self.inputs.gross_monthly,
            capacity.standard_paid_days,
            &active,
            leave.leave_days,
        )?;

        let insurance =
            calculate_employer_insurance(salary.total_salary, &self.inputs.employer_insurance)?;

        let total_cost = total_company_cost(
            salary.total_salary,
            insurance.amount,
            salary.leave_cost,
            salary.holiday_cost,
        )?;

        Ok(MonthResult {
            year,
            month,
            month_start,
            month_end,
            calc_start: active.calc_start,
            calc_end: active.calc_end,
            active: active.active,
            standard_workdays: capacity.standard_workdays,
            standard_holidays: capacity.standard_holidays,
            standard_paid_days: capacity.standard_paid_days,
            paid_workdays: active.paid_workdays,
            paid_holidays: active.paid_holidays,
            actual_paid_days: active.actual_paid_days,
            leave_days: leave.leave_days,
            leave_ratio: leave.leave_ratio,
            monthly_accrual: leave.monthly_accrual,
            daily_rate: salary.daily_rate,
            work_cost: salary.work_cost,
            leave_cost: salary.leave_cost,
            holiday_cost: salary.holiday_cost,
            total_salary: salary.total_salary,
            employer_insurance: insurance.amount,
            total_cost,
        })
    }

    /// Calculates the twelve month records of a year, January first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidMonth`] if the year is
    /// outside the representable date range, and
    /// [`crate::error::EngineError::AmountOutOfRange`] if a month or the year
    /// totals leave the `Decimal` range.
    pub fn calculate_year(&self, year: i32) -> EngineResult<Vec<MonthResult>> {
        let months = (1..=12)
            .map(|month| self.calculate_month(year, month))
            .collect::<EngineResult<Vec<_>>>()?;

        let totals = YearTotals::from_months(&months)?;
        debug!(
            year,
            active_months = months.iter().filter(|m| m.active).count(),
            total_salary = %totals.total_salary,
            employer_insurance = %totals.employer_insurance,
            total_cost = %totals.total_cost,
            "Year calculated"
        );

        Ok(months)
    }
}
