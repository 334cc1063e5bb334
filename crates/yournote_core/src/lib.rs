//! Core note synchronization and filtering engine for YourNote.
//! Pure in-memory logic; storage and transport stay behind repository traits.

pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod sync;
pub mod views;

pub use config::{LogSettings, WorkspaceConfig};
pub use filter::engine::{
    color_matches, filter_notes, partition_by_owner, text_matches, FilterSpec, OwnerPartition,
    SearchFields,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Color, Note, NoteId};
pub use model::view::{NamedView, View, ViewCollection, ViewError, ALL_NOTES_VIEW_NAME};
pub use repo::note_repo::{MemoryNoteRepository, NoteRepository};
pub use repo::view_repo::{MemoryViewRepository, ViewRepository};
pub use repo::{RepoError, RepoResult};
pub use service::workspace_service::{NotesWorkspace, WorkspaceError, WorkspaceResult};
pub use sync::reconciler::{
    append_created, drop_from_list, replace_note, SyncController, SyncDelta, SyncMode,
};
pub use views::membership::{add_note_to_view, remove_note_from_view, restrict_to_view};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
