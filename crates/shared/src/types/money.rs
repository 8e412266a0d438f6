//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major currency units.
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "INR", "USD").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee
    Inr,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Pound Sterling
    Gbp,
    /// UAE Dirham
    Aed,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Self; 5] = [Self::Inr, Self::Usd, Self::Eur, Self::Gbp, Self::Aed];

    /// Returns the symbol shown in front of amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Aed => "AED ",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Formats the amount for display, e.g. `₹100000.00`.
    ///
    /// Rounding uses banker's rounding so repeated display of the same
    /// allocation never drifts.
    #[must_use]
    pub fn display(&self, decimal_places: u32) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
        let width = decimal_places as usize;
        format!("{}{rounded:.width$}", self.currency.symbol())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inr => write!(f, "INR"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
            Self::Aed => write!(f, "AED"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "AED" => Ok(Self::Aed),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_money_new() {
        let amount = dec!(100.00);
        let money = Money::new(amount, Currency::Inr);
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, Currency::Inr);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(
            Money::new(dec!(100000), Currency::Inr).display(2),
            "₹100000.00"
        );
        assert_eq!(Money::new(dec!(40000.005), Currency::Usd).display(2), "$40000.00");
        assert_eq!(Money::new(dec!(12.5), Currency::Aed).display(0), "AED 12");
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Inr.to_string(), "INR");
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Gbp.to_string(), "GBP");
        assert_eq!(Currency::Aed.to_string(), "AED");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("INR").unwrap(), Currency::Inr);
        assert_eq!(Currency::from_str("inr").unwrap(), Currency::Inr);
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("EUR").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_str("GBP").unwrap(), Currency::Gbp);
        assert_eq!(Currency::from_str("AED").unwrap(), Currency::Aed);

        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn test_currency_serde_uppercase() {
        let json = serde_json::to_string(&Currency::Inr).unwrap();
        assert_eq!(json, "\"INR\"");
        let parsed: Currency = serde_json::from_str("\"GBP\"").unwrap();
        assert_eq!(parsed, Currency::Gbp);
    }
}
