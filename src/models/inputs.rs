//! Calculation input models.
//!
//! This module defines [`CalculationInputs`] and the [`EmployerInsurancePolicy`]
//! it carries. Both are immutable once built and owned by the caller.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Employer insurance contribution policy.
///
/// The contribution is `rate` applied to the month's salary total, with the
/// base capped at `cap` when `cap` is greater than zero. A cap of zero means
/// the base is uncapped.
///
/// # Example
///
/// ```
/// use hr_cost::models::EmployerInsurancePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = EmployerInsurancePolicy::default();
/// assert!(policy.enabled);
/// assert_eq!(policy.rate, Decimal::new(215, 3));
/// assert_eq!(policy.cap, Decimal::new(5_500_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerInsurancePolicy {
    /// Whether the employer contribution is charged at all.
    pub enabled: bool,
    /// The contribution rate as a fraction (0.215 for 21.5%).
    pub rate: Decimal,
    /// The cap on the insurance base. Zero means no cap.
    pub cap: Decimal,
}

impl Default for EmployerInsurancePolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: Decimal::new(215, 3),
            cap: Decimal::new(5_500_000, 0),
        }
    }
}

impl EmployerInsurancePolicy {
    /// A policy that never charges a contribution.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Returns true if the insurance base is capped.
    pub fn is_capped(&self) -> bool {
        self.cap > Decimal::ZERO
    }
}

fn default_annual_leave_days() -> Decimal {
    Decimal::new(12, 0)
}

/// Inputs for a payroll cost calculation.
///
/// Out-of-range business values (negative gross, negative leave days) are
/// accepted and yield degenerate outputs. Only the date range is an invariant:
/// `start_date` must not be after `end_date`, see [`CalculationInputs::validate`].
///
/// # Example
///
/// ```
/// use hr_cost::models::{CalculationInputs, EmployerInsurancePolicy};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let inputs = CalculationInputs {
///     gross_monthly: Decimal::new(20_000_000, 0),
///     start_date: NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
///     annual_leave_days: Decimal::new(12, 0),
///     employer_insurance: EmployerInsurancePolicy::default(),
/// };
/// assert!(inputs.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInputs {
    /// Gross monthly salary.
    pub gross_monthly: Decimal,
    /// First day of employment (inclusive).
    pub start_date: NaiveDate,
    /// Last day of employment (inclusive).
    pub end_date: NaiveDate,
    /// Annual leave entitlement in days.
    #[serde(default = "default_annual_leave_days")]
    pub annual_leave_days: Decimal,
    /// Employer insurance policy.
    #[serde(default)]
    pub employer_insurance: EmployerInsurancePolicy,
}

impl CalculationInputs {
    /// Creates inputs with the default leave entitlement and insurance policy.
    pub fn new(gross_monthly: Decimal, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            gross_monthly,
            start_date,
            end_date,
            annual_leave_days: default_annual_leave_days(),
            employer_insurance: EmployerInsurancePolicy::default(),
        }
    }

    /// Checks the employment date range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateRange`] if `start_date` is after `end_date`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}
