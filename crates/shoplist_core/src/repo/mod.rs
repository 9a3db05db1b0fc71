//! Repository layer over the item store.
//!
//! # Responsibility
//! - Expose use-case oriented list/exists/add/remove operations.
//! - Isolate storage and serialization details from session orchestration.
//!
//! # Invariants
//! - The repository never validates or deduplicates item names; callers
//!   must check `exists` before `add` where uniqueness matters.

pub mod item_repo;
