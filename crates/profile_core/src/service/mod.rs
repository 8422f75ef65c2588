//! Page-level use-case services.
//!
//! # Responsibility
//! - Hold per-page working copies (profile draft, staged history entry).
//! - Translate page actions into store mutations and manager calls.
//!
//! # Invariants
//! - Drafts never reach the store until an explicit, accepted submit.

pub mod entry_form;
pub mod profile_form;
