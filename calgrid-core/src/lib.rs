//! Core types and logic for the calgrid ecosystem.
//!
//! This crate holds everything below the presentation layer:
//! - `event` / `store`: the event model and the date-keyed event store
//! - `dates` / `day`: the pure month-grid date engine and the derived
//!   per-day view
//! - `validate`: time-order and overlap rules, run before add/edit
//! - `export`: month-filtered JSON export
//! - `storage`: the snapshot load/save seam
//! - `drag`: the pick-up/drop reschedule session

pub mod config;
pub mod dates;
pub mod day;
pub mod drag;
pub mod error;
pub mod event;
pub mod export;
pub mod storage;
pub mod store;
pub mod validate;

pub use error::{CalGridError, CalGridResult};
pub use event::{Event, EventDraft, EventType};
pub use store::EventStore;
