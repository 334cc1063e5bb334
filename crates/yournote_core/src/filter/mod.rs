//! In-memory note filtering.
//!
//! # Responsibility
//! - Compute the notes matching a text query and a color selection.
//! - Split visible notes into the user's own and shared notes.
//!
//! # Invariants
//! - Input collections are never mutated.
//! - Output never repeats a note id and keeps first-seen order.
//! - An empty query with no colors selected is the identity filter.

pub mod engine;
