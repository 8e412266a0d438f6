//! Parsing of the free-text total budget field.

use std::str::FromStr;

use fete_shared::types::Currency;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept from a typed budget.
///
/// Finer amounts are rounded away so an equal split never underflows to zero.
pub const BUDGET_SCALE: u32 = 4;

/// Largest budget or override amount the planner accepts.
///
/// Keeps every sum and percentage well inside `Decimal` range.
pub const MAX_BUDGET: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Parses the total budget typed by the user.
///
/// Leading currency symbols or codes (any case) and `,`/`_`/space digit
/// separators are ignored. The amount is rounded to [`BUDGET_SCALE`] places.
/// Anything that does not parse to a positive amount up to [`MAX_BUDGET`]
/// means "no budget entered" and yields `None`.
#[must_use]
pub fn parse_total_budget(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let unprefixed = strip_currency(trimmed).unwrap_or(trimmed);

    let digits: String = unprefixed
        .chars()
        .filter(|c| !matches!(c, ',' | '_') && !c.is_whitespace())
        .collect();

    let amount = Decimal::from_str(&digits)
        .ok()?
        .round_dp_with_strategy(BUDGET_SCALE, RoundingStrategy::MidpointNearestEven);
    (amount > Decimal::ZERO && amount <= MAX_BUDGET).then_some(amount)
}

fn strip_currency(input: &str) -> Option<&str> {
    let symbol = Currency::ALL
        .iter()
        .find_map(|c| input.strip_prefix(c.symbol().trim_end()));
    symbol.or_else(|| {
        let code = input.get(..3)?;
        Currency::from_str(code).ok().and_then(|_| input.get(3..))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("600000", dec!(600000))]
    #[case("  600000  ", dec!(600000))]
    #[case("6,00,000", dec!(600000))]
    #[case("600_000.50", dec!(600000.50))]
    #[case("₹600000", dec!(600000))]
    #[case("$ 1,250.75", dec!(1250.75))]
    #[case("INR 5000", dec!(5000))]
    #[case("inr 5000", dec!(5000))]
    #[case("Usd1,200", dec!(1200))]
    #[case("AED 12.5", dec!(12.5))]
    #[case("12.345678", dec!(12.3457))]
    #[case("0.0001", dec!(0.0001))]
    #[case("0.01", dec!(0.01))]
    #[case("1000000000000000", MAX_BUDGET)]
    fn test_parse_valid_budget(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_total_budget(raw), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("0")]
    #[case("0.00")]
    #[case("-100")]
    #[case("abc")]
    #[case("12abc")]
    #[case("1.2.3")]
    #[case("2000000000000000")]
    #[case("0.00003")]
    #[case("0.0000000000000000000000000003")]
    #[case("XYZ 500")]
    fn test_parse_invalid_budget(#[case] raw: &str) {
        assert_eq!(parse_total_budget(raw), None);
    }
}
