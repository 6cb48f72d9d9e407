//! Core data models for the HR cost engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod inputs;
mod month_result;

pub use holiday::HolidayEntry;
pub use inputs::{CalculationInputs, EmployerInsurancePolicy};
pub use month_result::{MonthResult, YearTotals};
