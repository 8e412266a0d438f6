//! Budget data types.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::BudgetError;
use super::input::MAX_BUDGET;

/// Distribution policy for an event budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetMode {
    /// Overrides sit on top of an equal baseline share, so the effective
    /// total can grow past the entered figure.
    #[default]
    Flexible,
    /// Overrides are carved out of the entered total and the remainder is
    /// split equally among the other categories.
    Fixed,
}

impl fmt::Display for BudgetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flexible => write!(f, "flexible"),
            Self::Fixed => write!(f, "fixed"),
        }
    }
}

/// Stable key of a service category (e.g. `"photography"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Wraps an already normalized key.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A selectable service line item for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique key.
    pub id: CategoryId,
    /// Human-readable label.
    pub name: String,
    /// Whether the user picked this service. Display only: every category
    /// takes part in allocation regardless of this flag.
    pub is_selected: bool,
}

impl Category {
    /// Creates an unselected category.
    #[must_use]
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_selected: false,
        }
    }
}

/// Amounts the user pinned for individual categories.
///
/// Every stored amount is strictly positive and at most [`MAX_BUDGET`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ManualOverrides(BTreeMap<CategoryId, Decimal>);

impl ManualOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `amount` for a category, replacing any previous override.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NonPositiveOverride` for zero or negative amounts
    /// and `BudgetError::OverrideTooLarge` above [`MAX_BUDGET`].
    pub fn set(&mut self, id: CategoryId, amount: Decimal) -> Result<(), BudgetError> {
        validate_override(amount)?;
        self.0.insert(id, amount);
        Ok(())
    }

    /// Resets a category to automatic distribution.
    pub fn remove(&mut self, id: &CategoryId) -> Option<Decimal> {
        self.0.remove(id)
    }

    /// Returns the pinned amount for a category.
    #[must_use]
    pub fn get(&self, id: &CategoryId) -> Option<Decimal> {
        self.0.get(id).copied()
    }

    /// Returns true if the category has a pinned amount.
    #[must_use]
    pub fn contains(&self, id: &CategoryId) -> bool {
        self.0.contains_key(id)
    }

    /// Sum of all pinned amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.0.values().copied().sum()
    }

    /// Number of pinned categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is pinned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates pinned amounts in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, Decimal)> {
        self.0.iter().map(|(id, amount)| (id, *amount))
    }
}

/// Checks that a manual override amount is acceptable.
///
/// # Errors
///
/// See [`ManualOverrides::set`].
pub fn validate_override(amount: Decimal) -> Result<(), BudgetError> {
    if amount <= Decimal::ZERO {
        return Err(BudgetError::NonPositiveOverride);
    }
    if amount > MAX_BUDGET {
        return Err(BudgetError::OverrideTooLarge { max: MAX_BUDGET });
    }
    Ok(())
}

/// Computed share of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    /// Allocated amount, never negative.
    pub amount: Decimal,
    /// Share of the mode's reference total, in percent.
    pub percentage: Decimal,
}

/// Allocation snapshot for every known category.
///
/// Always rebuilt from scratch; never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationResult(BTreeMap<CategoryId, CategoryAllocation>);

impl AllocationResult {
    pub(crate) fn insert(&mut self, id: CategoryId, allocation: CategoryAllocation) {
        self.0.insert(id, allocation);
    }

    /// Returns the allocation for a category.
    #[must_use]
    pub fn get(&self, id: &CategoryId) -> Option<&CategoryAllocation> {
        self.0.get(id)
    }

    /// Returns true if the category has an entry.
    #[must_use]
    pub fn contains(&self, id: &CategoryId) -> bool {
        self.0.contains_key(id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no allocation was computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, &CategoryAllocation)> {
        self.0.iter()
    }

    /// Sum of all allocated amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.0.values().map(|a| a.amount).sum()
    }

    /// Sum of all percentages.
    #[must_use]
    pub fn percentage_total(&self) -> Decimal {
        self.0.values().map(|a| a.percentage).sum()
    }

    /// Returns a display copy with amounts and percentages rounded using
    /// banker's rounding.
    #[must_use]
    pub fn rounded(&self, decimal_places: u32) -> Self {
        let round =
            |d: Decimal| d.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
        Self(
            self.0
                .iter()
                .map(|(id, a)| {
                    (
                        id.clone(),
                        CategoryAllocation {
                            amount: round(a.amount),
                            percentage: round(a.percentage),
                        },
                    )
                })
                .collect(),
        )
    }
}
