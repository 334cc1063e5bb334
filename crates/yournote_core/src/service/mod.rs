//! Application-level use-case services.
//!
//! # Responsibility
//! - Own the note/view state a notes page holds between user actions.
//! - Call repositories, then route their results through the pure engine.

pub mod workspace_service;
