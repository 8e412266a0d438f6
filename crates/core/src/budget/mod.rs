//! Event budget allocation across service categories.

pub mod allocator;
pub mod error;
pub mod input;
pub mod types;


pub use allocator::{BudgetAllocator, displayed_total};
pub use error::BudgetError;
pub use input::{BUDGET_SCALE, MAX_BUDGET, parse_total_budget};
pub use types::{
    AllocationResult, BudgetMode, Category, CategoryAllocation, CategoryId, ManualOverrides,
    validate_override,
};
