//! Event form error types.

use chrono::NaiveDate;
use fete_shared::AppError;
use thiserror::Error;

/// Errors raised when an event form is submitted.
#[derive(Debug, Error)]
pub enum EventError {
    /// Event name is blank.
    #[error("Event name is required")]
    MissingName,

    /// Location is blank.
    #[error("Event location is required")]
    MissingLocation,

    /// No date was picked.
    #[error("Event date is required")]
    MissingDate,

    /// Guest count is zero.
    #[error("Guest count must be at least 1")]
    NoGuests,

    /// Event date lies before today.
    #[error("Event date {date} is before {today}")]
    DateInPast {
        /// Requested date.
        date: NaiveDate,
        /// Reference date.
        today: NaiveDate,
    },
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        Self::Validation(err.to_string())
    }
}
