//! Budget error types.

use fete_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::CategoryId;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Manual override amounts must be strictly positive.
    #[error("Override amount must be greater than zero")]
    NonPositiveOverride,

    /// Manual override exceeds the largest amount the planner accepts.
    #[error("Override amount exceeds the maximum of {max}")]
    OverrideTooLarge {
        /// Largest accepted amount.
        max: Decimal,
    },

    /// Category not found.
    #[error("Category not found: {0}")]
    UnknownCategory(CategoryId),

    /// Category already exists.
    #[error("Category already exists: {0}")]
    DuplicateCategory(CategoryId),

    /// Category name is blank or has no usable characters.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match &err {
            BudgetError::DuplicateCategory(_) => Self::Conflict(err.to_string()),
            BudgetError::UnknownCategory(_)
            | BudgetError::NonPositiveOverride
            | BudgetError::OverrideTooLarge { .. }
            | BudgetError::EmptyCategoryName => Self::Validation(err.to_string()),
        }
    }
}
