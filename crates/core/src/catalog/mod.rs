//! Service category catalog for the event form.

pub mod registry;
pub mod slug;

pub use registry::CategoryCatalog;
pub use slug::slugify;
