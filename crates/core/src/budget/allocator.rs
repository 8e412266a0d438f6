//! Budget allocator.
//!
//! Turns a total budget, a [`BudgetMode`] and the pinned overrides into a
//! per-category amount and percentage. The allocator is a pure function: the
//! event form calls it again after every input change and swaps in the new
//! snapshot.

use rust_decimal::Decimal;

use super::input::parse_total_budget;
use super::types::{AllocationResult, BudgetMode, Category, CategoryAllocation, ManualOverrides};

/// Budget allocation service.
pub struct BudgetAllocator;

impl BudgetAllocator {
    /// Computes the allocation for every category.
    ///
    /// `total` of `None`, zero or below zero means no budget was entered and
    /// produces an empty result. Otherwise every category receives an entry,
    /// selected or not.
    ///
    /// - Flexible: unpinned categories take `total / n`, pinned ones their
    ///   override. Percentages are relative to the resulting sum.
    /// - Fixed: overrides are subtracted from `total` and the remainder is
    ///   split equally among unpinned categories. A remainder at or below
    ///   zero leaves them at zero. Percentages are relative to `total`.
    #[must_use]
    pub fn allocate(
        total: Option<Decimal>,
        mode: BudgetMode,
        categories: &[Category],
        overrides: &ManualOverrides,
    ) -> AllocationResult {
        let Some(total) = total.filter(|t| *t > Decimal::ZERO) else {
            return AllocationResult::default();
        };
        if categories.is_empty() {
            return AllocationResult::default();
        }

        match mode {
            BudgetMode::Flexible => Self::allocate_flexible(total, categories, overrides),
            BudgetMode::Fixed => Self::allocate_fixed(total, categories, overrides),
        }
    }

    /// Same as [`allocate`](Self::allocate) but takes the raw budget text.
    #[must_use]
    pub fn allocate_str(
        raw_total: &str,
        mode: BudgetMode,
        categories: &[Category],
        overrides: &ManualOverrides,
    ) -> AllocationResult {
        Self::allocate(parse_total_budget(raw_total), mode, categories, overrides)
    }

    fn allocate_flexible(
        total: Decimal,
        categories: &[Category],
        overrides: &ManualOverrides,
    ) -> AllocationResult {
        let base = total / Decimal::from(categories.len());

        let amounts: Vec<_> = categories
            .iter()
            .map(|c| (c, overrides.get(&c.id).unwrap_or(base)))
            .collect();
        let actual_total: Decimal = amounts.iter().map(|(_, amount)| *amount).sum();

        let mut result = AllocationResult::default();
        for (category, amount) in amounts {
            result.insert(
                category.id.clone(),
                CategoryAllocation {
                    amount,
                    percentage: percent_of(amount, actual_total),
                },
            );
        }
        result
    }

    fn allocate_fixed(
        total: Decimal,
        categories: &[Category],
        overrides: &ManualOverrides,
    ) -> AllocationResult {
        let remaining = total - overrides.total();
        let unpinned = categories
            .iter()
            .filter(|c| !overrides.contains(&c.id))
            .count();

        let equal_share = if remaining > Decimal::ZERO && unpinned > 0 {
            remaining / Decimal::from(unpinned)
        } else {
            Decimal::ZERO
        };

        let mut result = AllocationResult::default();
        for category in categories {
            let amount = overrides.get(&category.id).unwrap_or(equal_share);
            result.insert(
                category.id.clone(),
                CategoryAllocation {
                    amount,
                    percentage: percent_of(amount, total),
                },
            );
        }
        result
    }
}

/// Returns the total shown to the user next to the allocation.
///
/// In flexible mode any override makes the shown total follow the allocated
/// sum, so over-allocating a category effectively raises the budget. In every
/// other case it is the entered figure.
#[must_use]
pub fn displayed_total(
    entered: Option<Decimal>,
    mode: BudgetMode,
    overrides: &ManualOverrides,
    result: &AllocationResult,
) -> Option<Decimal> {
    let entered = entered.filter(|t| *t > Decimal::ZERO)?;
    if mode == BudgetMode::Flexible && !overrides.is_empty() && !result.is_empty() {
        Some(result.total())
    } else {
        Some(entered)
    }
}

fn percent_of(amount: Decimal, reference: Decimal) -> Decimal {
    if reference.is_zero() {
        return Decimal::ZERO;
    }
    amount
        .checked_div(reference)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}
