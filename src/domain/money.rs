use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept on every emitted series value.
pub const MONEY_SCALE: u32 = 2;

/// Rounds to cents, half away from zero (`0.125 -> 0.13`, `-0.125 -> -0.13`).
///
/// Every builder rounds through this function after each addition so that a
/// series can be reproduced exactly from its inputs.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `round2(acc + amount)`, or `None` when the sum leaves the `Decimal` range.
pub fn checked_add2(acc: Decimal, amount: Decimal) -> Option<Decimal> {
    acc.checked_add(amount).map(round2)
}

/// Splits an amount into two halves that sum back to the original exactly.
///
/// The first half is rounded to cents; the second absorbs any odd cent.
pub fn halve(amount: Decimal) -> (Decimal, Decimal) {
    let first = round2(amount / Decimal::TWO);
    (first, amount - first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round2_breaks_ties_away_from_zero() {
        assert_eq!(round2(dec!(0.125)), dec!(0.13));
        assert_eq!(round2(dec!(-0.125)), dec!(-0.13));
        assert_eq!(round2(dec!(2.675)), dec!(2.68));
        assert_eq!(round2(dec!(0.124)), dec!(0.12));
    }

    #[test]
    fn round2_leaves_whole_cents_alone() {
        assert_eq!(round2(dec!(-1200)), dec!(-1200));
        assert_eq!(round2(dec!(675.00)), dec!(675.00));
    }

    #[test]
    fn checked_add2_rounds_or_reports_overflow() {
        assert_eq!(checked_add2(dec!(0.005), dec!(1)), Some(dec!(1.01)));
        assert_eq!(checked_add2(Decimal::MAX, Decimal::ONE), None);
        assert_eq!(checked_add2(Decimal::MIN, dec!(-1)), None);
    }

    #[test]
    fn halve_conserves_the_original_amount() {
        assert_eq!(halve(dec!(-1200)), (dec!(-600), dec!(-600)));
        let (first, second) = halve(dec!(-0.05));
        assert_eq!(first, dec!(-0.03));
        assert_eq!(second, dec!(-0.02));
        assert_eq!(first + second, dec!(-0.05));
    }
}
