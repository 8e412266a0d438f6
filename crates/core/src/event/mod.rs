//! Event creation form and submitted drafts.

pub mod error;
pub mod form;
pub mod types;


pub use error::EventError;
pub use form::EventForm;
pub use types::{EventDraft, EventType};
