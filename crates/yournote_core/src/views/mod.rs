//! View membership store.
//!
//! # Responsibility
//! - Add and remove note ids in named views using value-passing updates.
//! - Restrict a note collection to the currently selected view.
//!
//! # Invariants
//! - The reserved "All notes" view is never mutated.
//! - Unknown views and reserved targets are silent no-ops in the value-passing
//!   API; the checked `ViewCollection` methods report them as `ViewError`.

pub mod membership;
