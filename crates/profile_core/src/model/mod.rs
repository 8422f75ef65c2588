//! Domain model for the profile wizard session.
//!
//! # Responsibility
//! - Define the record shapes kept in repeatable history collections.
//! - Define the profile aggregate, the fixed external service list and the
//!   session-wide `AppState` root.
//!
//! # Invariants
//! - Every history record carries a stable `EntryId`.
//! - Profile scalar fields are never absent; unset means empty string.
//! - The service list is fixed at construction; only `connected` changes.

pub mod profile;
pub mod record;
pub mod schema;
pub mod service;
pub mod state;
