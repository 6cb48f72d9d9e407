//! Prorated annual leave accrual.
//!
//! A twelfth of the annual entitlement accrues each month, prorated by the
//! ratio of actual paid days (I) to standard workdays (F). The accrued days
//! never exceed the workdays the employee actually had available.

use rust_decimal::Decimal;

/// Leave accrued for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveAccrual {
    /// Annual entitlement divided by 12.
    pub monthly_accrual: Decimal,
    /// Presence ratio `I / F`, clamped to [0, 1]. Zero when F is zero.
    pub leave_ratio: Decimal,
    /// (J) Accrued leave days, capped at the paid workdays.
    pub leave_days: Decimal,
}

/// Calculates the leave accrued in a month.
///
/// # Arguments
///
/// * `annual_leave_days` - Annual leave entitlement
/// * `standard_workdays` - F, workdays in the full month
/// * `actual_paid_days` - I, paid days in the active range
/// * `paid_workdays` - Workdays in the active range, the cap on accrual
///
/// # Example
///
/// ```
/// use hr_cost::calculation::calculate_leave_accrual;
/// use rust_decimal::Decimal;
///
/// let accrual = calculate_leave_accrual(Decimal::new(12, 0), 27, 27, 27);
/// assert_eq!(accrual.leave_ratio, Decimal::ONE);
/// assert_eq!(accrual.leave_days, Decimal::ONE);
/// ```
pub fn calculate_leave_accrual(
    annual_leave_days: Decimal,
    standard_workdays: u32,
    actual_paid_days: u32,
    paid_workdays: u32,
) -> LeaveAccrual {
    let monthly_accrual = annual_leave_days / Decimal::from(12);

    let leave_ratio = if standard_workdays == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(actual_paid_days) / Decimal::from(standard_workdays))
            .clamp(Decimal::ZERO, Decimal::ONE)
    };

    let leave_days = (monthly_accrual * leave_ratio).min(Decimal::from(paid_workdays));

    LeaveAccrual {
        monthly_accrual,
        leave_ratio,
        leave_days,
    }
}
