//! Event creation form state.
//!
//! Holds everything the user has entered so far. Each budget-related mutation
//! re-runs [`BudgetAllocator::allocate`] and replaces the allocation snapshot,
//! so readers always see an allocation consistent with the current inputs.

use chrono::{NaiveDate, Utc};
use fete_shared::types::EventId;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::EventError;
use super::types::{EventDraft, EventType};
use crate::budget::{
    AllocationResult, BudgetAllocator, BudgetError, BudgetMode, CategoryId, ManualOverrides,
    displayed_total, parse_total_budget,
};
use crate::catalog::CategoryCatalog;

/// In-progress event creation form.
#[derive(Debug, Clone)]
pub struct EventForm {
    name: String,
    event_type: EventType,
    date: Option<NaiveDate>,
    location: String,
    guest_count: u32,
    budget_mode: BudgetMode,
    total_budget_input: String,
    catalog: CategoryCatalog,
    overrides: ManualOverrides,
    allocation: AllocationResult,
}

impl Default for EventForm {
    fn default() -> Self {
        Self::new(CategoryCatalog::standard())
    }
}

impl EventForm {
    /// Creates an empty form offering the given categories.
    #[must_use]
    pub fn new(catalog: CategoryCatalog) -> Self {
        Self {
            name: String::new(),
            event_type: EventType::default(),
            date: None,
            location: String::new(),
            guest_count: 0,
            budget_mode: BudgetMode::default(),
            total_budget_input: String::new(),
            catalog,
            overrides: ManualOverrides::new(),
            allocation: AllocationResult::default(),
        }
    }

    /// Sets the event name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the event type.
    pub fn set_event_type(&mut self, event_type: EventType) {
        self.event_type = event_type;
    }

    /// Sets the event date.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// Sets the location.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Sets the expected guest count.
    pub fn set_guest_count(&mut self, guest_count: u32) {
        self.guest_count = guest_count;
    }

    /// Replaces the total budget text and recomputes.
    pub fn set_total_budget(&mut self, raw: impl Into<String>) {
        self.total_budget_input = raw.into();
        self.recompute();
    }

    /// Switches the budget mode and recomputes.
    pub fn set_mode(&mut self, mode: BudgetMode) {
        self.budget_mode = mode;
        self.recompute();
    }

    /// Flips a category's selection and recomputes.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::UnknownCategory` for keys not in the catalog.
    pub fn toggle_category(&mut self, id: &CategoryId) -> Result<bool, BudgetError> {
        let selected = self.catalog.toggle(id)?;
        self.recompute();
        Ok(selected)
    }

    /// Sets a category's selection flag and recomputes.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::UnknownCategory` for keys not in the catalog.
    pub fn set_category_selected(
        &mut self,
        id: &CategoryId,
        selected: bool,
    ) -> Result<(), BudgetError> {
        self.catalog.set_selected(id, selected)?;
        self.recompute();
        Ok(())
    }

    /// Adds a custom category and recomputes.
    ///
    /// # Errors
    ///
    /// See [`CategoryCatalog::add_custom`].
    pub fn add_custom_category(&mut self, name: &str) -> Result<CategoryId, BudgetError> {
        let id = self.catalog.add_custom(name)?.id.clone();
        self.recompute();
        Ok(id)
    }

    /// Pins a custom amount for a category and recomputes.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::UnknownCategory` for keys not in the catalog and
    /// the validation errors of [`ManualOverrides::set`].
    pub fn set_override(&mut self, id: &CategoryId, amount: Decimal) -> Result<(), BudgetError> {
        if !self.catalog.contains(id) {
            return Err(BudgetError::UnknownCategory(id.clone()));
        }
        self.overrides.set(id.clone(), amount)?;
        self.recompute();
        Ok(())
    }

    /// Resets a category to automatic distribution and recomputes.
    ///
    /// Returns the amount that was pinned, if any.
    pub fn reset_override(&mut self, id: &CategoryId) -> Option<Decimal> {
        let removed = self.overrides.remove(id);
        if removed.is_some() {
            self.recompute();
        }
        removed
    }

    /// Current allocation snapshot.
    #[must_use]
    pub fn allocation(&self) -> &AllocationResult {
        &self.allocation
    }

    /// Parsed total budget as typed, `None` when unusable.
    #[must_use]
    pub fn total_budget(&self) -> Option<Decimal> {
        parse_total_budget(&self.total_budget_input)
    }

    /// Budget figure shown to the user.
    #[must_use]
    pub fn displayed_total(&self) -> Option<Decimal> {
        displayed_total(
            self.total_budget(),
            self.budget_mode,
            &self.overrides,
            &self.allocation,
        )
    }

    /// Current budget mode.
    #[must_use]
    pub fn budget_mode(&self) -> BudgetMode {
        self.budget_mode
    }

    /// Categories known to the form.
    #[must_use]
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Pinned amounts.
    #[must_use]
    pub fn overrides(&self) -> &ManualOverrides {
        &self.overrides
    }

    /// Validates the form and produces an event draft.
    ///
    /// A missing or unusable budget does not block submission; the draft
    /// then carries no budget and an empty allocation.
    ///
    /// # Errors
    ///
    /// Returns the first failing `EventError` check.
    pub fn submit(&self, today: NaiveDate) -> Result<EventDraft, EventError> {
        if self.name.trim().is_empty() {
            return Err(EventError::MissingName);
        }
        let date = self.date.ok_or(EventError::MissingDate)?;
        if date < today {
            return Err(EventError::DateInPast { date, today });
        }
        if self.location.trim().is_empty() {
            return Err(EventError::MissingLocation);
        }
        if self.guest_count == 0 {
            return Err(EventError::NoGuests);
        }

        Ok(EventDraft {
            id: EventId::new(),
            name: self.name.trim().to_string(),
            event_type: self.event_type,
            date,
            location: self.location.trim().to_string(),
            guest_count: self.guest_count,
            budget_mode: self.budget_mode,
            total_budget: self.displayed_total(),
            entered_budget: self.total_budget(),
            categories: self.catalog.as_slice().to_vec(),
            overrides: self.overrides.clone(),
            allocation: self.allocation.clone(),
            created_at: Utc::now(),
        })
    }

    fn recompute(&mut self) {
        let total = self.total_budget();
        self.allocation = BudgetAllocator::allocate(
            total,
            self.budget_mode,
            self.catalog.as_slice(),
            &self.overrides,
        );

        if let Some(total) = total
            && self.budget_mode == BudgetMode::Fixed
            && self.overrides.total() > total
        {
            warn!(
                total = %total,
                pinned = %self.overrides.total(),
                "Pinned amounts exceed the fixed budget; automatic categories get nothing"
            );
        }

        debug!(
            mode = %self.budget_mode,
            categories = self.catalog.len(),
            overrides = self.overrides.len(),
            allocated = %self.allocation.total(),
            "Recomputed budget allocation"
        );
    }
}
