//! Domain model shared by the sync, filter and view components.
//!
//! # Responsibility
//! - Define note and view records exchanged with repository collaborators.
//! - Keep the reserved "All notes" view a distinct variant, not a name.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`; set operations compare ids
//!   only, never note content.
//! - Named view memberships are duplicate-free.

pub mod note;
pub mod view;
