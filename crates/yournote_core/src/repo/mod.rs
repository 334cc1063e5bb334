//! Repository contracts for the note and view stores.
//!
//! # Responsibility
//! - Describe the collaborator APIs the application calls around the engine.
//! - Provide in-memory implementations for tests and demos.
//!
//! # Invariants
//! - Pure engine modules (`sync`, `filter`, `views`) never call repositories;
//!   only the workspace service does.
//! - Repositories return semantic errors (`NoteNotFound`) rather than
//!   silently ignoring unknown ids.

use crate::model::note::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_repo;
pub mod view_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by note and view stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NoteNotFound(NoteId),
    AttachmentNotFound { note_id: NoteId, filename: String },
    /// Store could not serve the request (transport, auth, storage).
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::AttachmentNotFound { note_id, filename } => {
                write!(f, "attachment `{filename}` not found on note {note_id}")
            }
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for RepoError {}
