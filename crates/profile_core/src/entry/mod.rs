//! Repeatable-entry collections.
//!
//! # Responsibility
//! - Stage, edit, validate, commit and remove history records.
//! - Enforce the per-collection entry cap.
//!
//! # Invariants
//! - A committed collection never exceeds its configured cap.
//! - Record identifiers stay unique inside one collection.

pub mod collection;
