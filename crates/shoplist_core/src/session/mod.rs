//! Interaction session orchestrating repository, view and UI state.
//!
//! # Responsibility
//! - Translate user interactions into repository + view mutations.
//! - Hold the Normal/Editing state machine and the pending-remove prompt.
//!
//! # Invariants
//! - Every mutating operation ends with a reconcile pass.
//! - Rejected submissions leave repository, view and mode untouched.

pub mod list_session;
