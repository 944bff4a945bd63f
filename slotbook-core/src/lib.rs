//! Core types and services for slotbook.
//!
//! slotbook keeps a registry of people, lets the caller assign each selected
//! person a time on a shared date, and stores the result as events:
//! - `registry` for the set of known names
//! - `store` for the SQLite-backed people and events tables
//! - `selection` for turning per-person choices into a batch of events
//! - `service` for upcoming listings, edits, deletes and expiry purges
//! - `summary` and `share` for rendering and handing off a text digest

pub mod config;
pub mod error;
pub mod event;
pub mod person;
pub mod registry;
pub mod selection;
pub mod service;
pub mod share;
pub mod store;
pub mod summary;
pub mod when;

pub use error::{SlotbookError, SlotbookResult};
pub use event::{Event, NewEvent};
pub use person::{AddNameOutcome, Person};
pub use store::Store;
