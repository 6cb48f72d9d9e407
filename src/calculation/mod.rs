//! Calculation logic for the HR cost engine.
//!
//! This module contains the calendar utilities for a Monday-Saturday work
//! week and the monthly pipeline stages: standard capacity, active paid days,
//! leave accrual, salary split and employer insurance. [`CalculationEngine`]
//! runs the stages for a month or a whole year.

mod active_days;
mod amount;
mod calendar;
mod engine;
mod insurance;
mod leave_accrual;
mod salary;
mod standard_capacity;

pub use active_days::{ActiveDays, calculate_active_days};
pub(crate) use amount::checked_total;
pub use calendar::{
    HolidaySet, count_paid_holidays, count_workdays, holiday_set, is_workday, month_bounds,
};
pub use engine::{CalculationEngine, total_company_cost};
pub use insurance::{InsuranceContribution, calculate_employer_insurance};
pub use leave_accrual::{LeaveAccrual, calculate_leave_accrual};
pub use salary::{SalaryBreakdown, calculate_salary, daily_rate};
pub use standard_capacity::{StandardCapacity, calculate_standard_capacity};
