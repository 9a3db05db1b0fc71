//! List view state reflected by the rendering front end.
//!
//! # Responsibility
//! - Own the ordered row collection the UI draws each frame.
//! - Track per-row editing and filter visibility flags.
//!
//! # Invariants
//! - Row order mirrors the persisted item order, except for the transient
//!   window inside a single session operation.
//! - At most one row carries the editing mark at any time.

pub mod list_view;
