//! Employer insurance contribution.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::EmployerInsurancePolicy;

use super::amount::checked_product;

/// The employer insurance charge for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsuranceContribution {
    /// The salary base after the cap. Zero when the policy is disabled.
    pub base: Decimal,
    /// (P) The contribution, `base x rate`.
    pub amount: Decimal,
}

/// Calculates the employer insurance contribution on a month's salary total.
///
/// The base is the salary total, capped at the policy cap when the cap is
/// positive. A disabled policy charges nothing.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::AmountOutOfRange`] if `base x rate`
/// does not fit in a `Decimal`.
///
/// # Example
///
/// ```
/// use hr_cost::calculation::calculate_employer_insurance;
/// use hr_cost::models::EmployerInsurancePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = EmployerInsurancePolicy::default(); // 21.5%, cap 5,500,000
/// let contribution = calculate_employer_insurance(Decimal::new(20_000_000, 0), &policy).unwrap();
/// assert_eq!(contribution.base, Decimal::new(5_500_000, 0));
/// assert_eq!(contribution.amount, Decimal::new(1_182_500, 0));
/// ```
pub fn calculate_employer_insurance(
    total_salary: Decimal,
    policy: &EmployerInsurancePolicy,
) -> EngineResult<InsuranceContribution> {
    if !policy.enabled {
        return Ok(InsuranceContribution {
            base: Decimal::ZERO,
            amount: Decimal::ZERO,
        });
    }

    let base = if policy.is_capped() {
        total_salary.min(policy.cap)
    } else {
        total_salary
    };

    Ok(InsuranceContribution {
        base,
        amount: checked_product(base, policy.rate, "employer insurance (P)")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn policy(enabled: bool, rate: &str, cap: &str) -> EmployerInsurancePolicy {
        EmployerInsurancePolicy {
            enabled,
            rate: dec(rate),
            cap: dec(cap),
        }
    }

    #[test]
    fn test_salary_above_cap_uses_cap() {
        let contribution =
            calculate_employer_insurance(dec("20000000"), &policy(true, "0.215", "5500000")).unwrap();
        assert_eq!(contribution.base, dec("5500000"));
        assert_eq!(contribution.amount, dec("1182500"));
    }

    #[test]
    fn test_salary_below_cap_uses_salary() {
        let contribution =
            calculate_employer_insurance(dec("4000000"), &policy(true, "0.215", "5500000")).unwrap();
        assert_eq!(contribution.base, dec("4000000"));
        assert_eq!(contribution.amount, dec("860000"));
    }

    #[test]
    fn test_zero_cap_means_uncapped() {
        let contribution = calculate_employer_insurance(dec("20000000"), &policy(true, "0.215", "0")).unwrap();
        assert_eq!(contribution.base, dec("20000000"));
        assert_eq!(contribution.amount, dec("4300000"));
    }

    #[test]
    fn test_disabled_policy_charges_nothing() {
        let contribution =
            calculate_employer_insurance(dec("20000000"), &policy(false, "0.215", "5500000")).unwrap();
        assert_eq!(contribution.amount, Decimal::ZERO);
    }

    #[test]
    fn test_rate_overflowing_uncapped_base_is_an_error() {
        let result = calculate_employer_insurance(Decimal::MAX, &policy(true, "2", "0"));
        assert!(matches!(
            result,
            Err(crate::error::EngineError::AmountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_cap_keeps_large_salary_in_range() {
        let contribution =
            calculate_employer_insurance(Decimal::MAX, &policy(true, "0.215", "5500000")).unwrap();
        assert_eq!(contribution.amount, dec("1182500"));
    }

    #[test]
    fn test_zero_salary_charges_nothing() {
        let contribution =
            calculate_employer_insurance(Decimal::ZERO, &EmployerInsurancePolicy::default()).unwrap();
        assert_eq!(contribution.amount, Decimal::ZERO);
    }
}
