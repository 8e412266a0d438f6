//! Event data types.

use chrono::{DateTime, NaiveDate, Utc};
use fete_shared::types::EventId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::{AllocationResult, BudgetMode, Category, ManualOverrides};

/// Kind of event being planned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Wedding or reception.
    #[default]
    Wedding,
    /// Birthday party.
    Birthday,
    /// Corporate event, offsite or launch.
    Corporate,
    /// Anniversary celebration.
    Anniversary,
    /// Baby shower.
    BabyShower,
    /// Engagement ceremony.
    Engagement,
    /// Anything else.
    Other,
}

/// Submitted event, handed to the event-creation consumer.
#[derive(Debug, Clone, Serialize)]
pub struct EventDraft {
    /// Draft ID.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Event type.
    pub event_type: EventType,
    /// Event date.
    pub date: NaiveDate,
    /// Venue city or address.
    pub location: String,
    /// Expected number of guests.
    pub guest_count: u32,
    /// Budget distribution policy.
    pub budget_mode: BudgetMode,
    /// Budget as shown on the form (grows with flexible overrides).
    /// `None` when no usable budget was entered.
    pub total_budget: Option<Decimal>,
    /// Budget as typed, before flexible overrides.
    pub entered_budget: Option<Decimal>,
    /// Every category known to the form, with selection flags.
    pub categories: Vec<Category>,
    /// Pinned per-category amounts.
    pub overrides: ManualOverrides,
    /// Final allocation snapshot.
    pub allocation: AllocationResult,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}
