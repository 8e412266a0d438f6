//! Core event planning logic for Fete.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `budget` - Budget allocation across service categories
//! - `catalog` - Service categories offered on the event form
//! - `event` - Event creation form and submitted drafts

pub mod budget;
pub mod catalog;
pub mod event;
