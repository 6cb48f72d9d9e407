//! Request types for the HR cost API.
//!
//! This module defines the JSON request structures for the calculation,
//! export and holiday parsing endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::adapters::ColumnLabels;
use crate::config::ConfigLoader;
use crate::models::{CalculationInputs, EmployerInsurancePolicy, HolidayEntry};

/// Calculation inputs as sent by a client.
///
/// The leave entitlement and the insurance policy are optional; when absent
/// the configured payroll defaults apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputsRequest {
    /// Gross monthly salary.
    pub gross_monthly: Decimal,
    /// First day of employment (inclusive).
    pub start_date: NaiveDate,
    /// Last day of employment (inclusive).
    pub end_date: NaiveDate,
    /// Annual leave entitlement override.
    #[serde(default)]
    pub annual_leave_days: Option<Decimal>,
    /// Employer insurance policy override.
    #[serde(default)]
    pub employer_insurance: Option<EmployerInsurancePolicy>,
}

impl InputsRequest {
    /// Fills omitted fields from the configured payroll defaults.
    pub fn resolve(self, config: &ConfigLoader) -> CalculationInputs {
        let mut inputs = config.default_inputs(self.gross_monthly, self.start_date, self.end_date);
        if let Some(days) = self.annual_leave_days {
            inputs.annual_leave_days = days;
        }
        if let Some(policy) = self.employer_insurance {
            inputs.employer_insurance = policy;
        }
        inputs
    }
}

/// Request body for the `/calculate` and `/export` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The calculation inputs.
    pub inputs: InputsRequest,
    /// The year to calculate.
    pub year: i32,
    /// Holiday calendar override. The configured calendar for `year` is used
    /// when absent.
    #[serde(default)]
    pub holidays: Option<Vec<HolidayEntry>>,
    /// Header labels for the exported monthly table.
    #[serde(default)]
    pub labels: ColumnLabels,
}

/// Request body for the `/calculate/month` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRequest {
    /// The calculation inputs.
    pub inputs: InputsRequest,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Holiday calendar override.
    #[serde(default)]
    pub holidays: Option<Vec<HolidayEntry>>,
}

/// Query parameters for the `/holidays/parse` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayParseQuery {
    /// The uploaded file name; its extension selects the parser.
    pub file_name: String,
}
