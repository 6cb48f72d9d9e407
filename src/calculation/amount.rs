//! Checked money arithmetic.
//!
//! Cost quantities are multiplied and summed through these helpers so an
//! input too large for `Decimal` fails with
//! [`EngineError::AmountOutOfRange`] instead of panicking.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Multiplies two amounts, failing when the product is out of range.
pub(crate) fn checked_product(
    lhs: Decimal,
    rhs: Decimal,
    quantity: &'static str,
) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or(EngineError::AmountOutOfRange { quantity })
}

/// Sums amounts left to right, failing on the first out of range partial sum.
pub(crate) fn checked_total<I>(amounts: I, quantity: &'static str) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount)
            .ok_or(EngineError::AmountOutOfRange { quantity })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_in_range() {
        let product = checked_product(Decimal::from(27), Decimal::new(100_000, 0), "O").unwrap();
        assert_eq!(product, Decimal::new(2_700_000, 0));
    }

    #[test]
    fn test_product_out_of_range() {
        let result = checked_product(Decimal::MAX, Decimal::TWO, "O");
        assert!(matches!(
            result,
            Err(EngineError::AmountOutOfRange { quantity: "O" })
        ));
    }

    #[test]
    fn test_total_sums_in_order() {
        let total = checked_total(
            [Decimal::ONE, Decimal::TWO, Decimal::new(3, 0)],
            "Q",
        )
        .unwrap();
        assert_eq!(total, Decimal::new(6, 0));
        assert_eq!(checked_total([], "Q").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_total_out_of_range() {
        let result = checked_total([Decimal::MAX, Decimal::ONE], "Q");
        assert!(matches!(result, Err(EngineError::AmountOutOfRange { .. })));
    }
}
