//! Notes workspace service.
//!
//! # Responsibility
//! - Hold the authoritative note list, the visible list, the views and the
//!   current selection for one signed-in user.
//! - Persist through repositories first, then replace local snapshots.
//!
//! # Invariants
//! - Every change to the authoritative list is followed by a reconcile.
//! - The active filter is re-evaluated only when criteria change, so a note
//!   created under an active filter stays visible.
//! - View changes are persisted before the local collection is replaced.

use crate::config::WorkspaceConfig;
use crate::filter::engine::{filter_notes, partition_by_owner, FilterSpec, OwnerPartition};
use crate::model::note::{Note, NoteId};
use crate::model::view::{NamedView, View, ViewCollection, ViewError};
use crate::repo::note_repo::NoteRepository;
use crate::repo::view_repo::ViewRepository;
use crate::repo::RepoError;
use crate::sync::reconciler::{append_created, drop_from_list, replace_note, SyncController};
use crate::views::membership::{add_note_to_view, remove_note_from_view, restrict_to_view};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Errors from workspace operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    /// Target note is not in the authoritative list.
    NoteNotFound(NoteId),
    View(ViewError),
    Repo(RepoError),
}

impl Display for WorkspaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::View(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WorkspaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<RepoError> for WorkspaceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NoteNotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<ViewError> for WorkspaceError {
    fn from(value: ViewError) -> Self {
        Self::View(value)
    }
}

/// Note/view state of one user session.
pub struct NotesWorkspace<N: NoteRepository, V: ViewRepository> {
    notes_repo: N,
    views_repo: V,
    owner: String,
    notes: Vec<Note>,
    visible: Vec<Note>,
    views: ViewCollection,
    selected_view: Option<View>,
    filter: FilterSpec,
    sync: SyncController,
}

impl<N: NoteRepository, V: ViewRepository> NotesWorkspace<N, V> {
    /// Loads notes and views and shows everything under "All notes".
    pub fn open(
        notes_repo: N,
        views_repo: V,
        owner: impl Into<String>,
        config: WorkspaceConfig,
    ) -> WorkspaceResult<Self> {
        let notes = notes_repo.fetch_all()?;
        let views = views_repo.fetch_all()?;
        let mut sync = SyncController::new(config.sync_mode);
        let visible = sync.reconcile(&notes, &notes);

        info!(
            "event=workspace_open module=service status=ok notes={} views={} sync_mode={:?}",
            notes.len(),
            views.len(),
            config.sync_mode
        );

        Ok(Self {
            notes_repo,
            views_repo,
            owner: owner.into(),
            notes,
            visible,
            views,
            selected_view: Some(View::AllNotes),
            filter: FilterSpec::new(),
            sync,
        })
    }

    pub fn owner(&self) -> &str {
        self.owner.as_str()
    }

    /// Authoritative note list.
    pub fn notes(&self) -> &[Note] {
        self.notes.as_slice()
    }

    /// Notes passing the active filter, before view restriction.
    pub fn visible(&self) -> &[Note] {
        self.visible.as_slice()
    }

    pub fn views(&self) -> &ViewCollection {
        &self.views
    }

    pub fn selected_view(&self) -> Option<&View> {
        self.selected_view.as_ref()
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn note(&self, note_id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == note_id)
    }

    /// Views offered in the "add to view" menu.
    pub fn add_targets(&self) -> &[NamedView] {
        self.views.add_targets()
    }

    /// Visible notes restricted to the selected view, split by owner.
    pub fn displayed(&self) -> OwnerPartition {
        match self.selected_view.as_ref() {
            Some(view) => {
                let restricted = restrict_to_view(&self.visible, view);
                partition_by_owner(&restricted, &self.owner)
            }
            None => partition_by_owner(&self.visible, &self.owner),
        }
    }

    /// Re-fetches notes from the store and reconciles the visible list.
    pub fn refresh(&mut self) -> WorkspaceResult<()> {
        self.notes = self.notes_repo.fetch_all()?;
        self.resync();
        Ok(())
    }

    /// Creates an empty note and appends it, flagged as just created.
    pub fn create_note(&mut self) -> WorkspaceResult<Note> {
        let mut created = self.notes_repo.create()?;
        self.notes = append_created(&self.notes, created.clone());
        self.resync();
        created.just_created = true;
        debug!(
            "event=note_create module=service status=ok notes={}",
            self.notes.len()
        );
        Ok(created)
    }

    /// Clears the just-created marker once the caller has opened the note.
    pub fn acknowledge_created(&mut self, note_id: &NoteId) {
        for note in self.notes.iter_mut().chain(self.visible.iter_mut()) {
            if &note.id == note_id {
                note.just_created = false;
            }
        }
    }

    pub fn delete_note(&mut self, note_id: &NoteId) -> WorkspaceResult<()> {
        self.ensure_note(note_id)?;
        self.notes_repo.delete(note_id)?;
        self.notes = drop_from_list(&self.notes, note_id);
        self.visible = drop_from_list(&self.visible, note_id);
        self.resync();
        debug!(
            "event=note_delete module=service status=ok notes={}",
            self.notes.len()
        );
        Ok(())
    }

    /// Stores an edited note and swaps it into both lists by id.
    pub fn update_note(&mut self, note: Note) -> WorkspaceResult<()> {
        self.ensure_note(&note.id)?;
        self.notes_repo.update(&note)?;
        self.replace_local(&note);
        Ok(())
    }

    /// Records an attachment uploaded by the file collaborator.
    pub fn attach_file(
        &mut self,
        note_id: &NoteId,
        filename: impl Into<String>,
    ) -> WorkspaceResult<()> {
        let mut note = self.ensure_note(note_id)?.clone();
        note.files.push(filename.into());
        self.update_note(note)
    }

    pub fn detach_file(&mut self, note_id: &NoteId, filename: &str) -> WorkspaceResult<()> {
        let mut note = self.ensure_note(note_id)?.clone();
        self.notes_repo.detach_file(note_id, filename)?;
        note.remove_file(filename);
        self.replace_local(&note);
        Ok(())
    }

    /// Recomputes the visible list from the full note list.
    pub fn apply_filter(&mut self, spec: FilterSpec) {
        self.visible = filter_notes(&self.notes, &spec);
        self.filter = spec;
    }

    pub fn clear_filter(&mut self) {
        self.apply_filter(FilterSpec::new());
    }

    /// Selects a view by name; the reserved name selects "All notes".
    pub fn select_view(&mut self, name: &str) -> WorkspaceResult<&View> {
        let view = self
            .views
            .select(name)
            .ok_or_else(|| ViewError::ViewNotFound(name.to_string()))?;
        Ok(self.selected_view.insert(view))
    }

    /// Creates and persists an empty named view.
    pub fn create_view(&mut self, name: &str) -> WorkspaceResult<NamedView> {
        let mut next = self.views.clone();
        let created = next.create_view(name)?.clone();
        self.views_repo.persist(&next)?;
        self.views = next;
        Ok(created)
    }

    /// Adds a note to a named view. Returns whether membership changed.
    pub fn add_to_view(&mut self, view_name: &str, note_id: &NoteId) -> WorkspaceResult<bool> {
        let next = add_note_to_view(self.views.clone(), view_name, note_id);
        if next == self.views {
            return Ok(false);
        }

        self.views_repo.persist(&next)?;
        if let Some(View::Named(selected)) = self.selected_view.as_ref() {
            self.selected_view = next.select(selected.name());
        }
        self.views = next;
        Ok(true)
    }

    /// Hides a note from the selected view. Returns whether membership changed.
    pub fn hide_from_view(&mut self, note_id: &NoteId) -> WorkspaceResult<bool> {
        let (next, selected) =
            remove_note_from_view(self.views.clone(), self.selected_view.clone(), note_id);
        if next == self.views {
            return Ok(false);
        }

        self.views_repo.persist(&next)?;
        self.views = next;
        self.selected_view = selected;
        Ok(true)
    }

    fn ensure_note(&self, note_id: &NoteId) -> WorkspaceResult<&Note> {
        self.note(note_id)
            .ok_or_else(|| WorkspaceError::NoteNotFound(note_id.clone()))
    }

    fn replace_local(&mut self, note: &Note) {
        self.notes = replace_note(&self.notes, note);
        self.visible = replace_note(&self.visible, note);
    }

    fn resync(&mut self) {
        self.visible = self.sync.reconcile(&self.notes, &self.visible);
    }
}
