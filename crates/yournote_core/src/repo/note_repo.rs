//! Note repository contract and in-memory implementation.

use crate::model::note::{Note, NoteId};
use crate::repo::{RepoError, RepoResult};

/// Note store consumed by the application layer.
pub trait NoteRepository {
    /// Returns every note visible to the current user, in store order.
    fn fetch_all(&self) -> RepoResult<Vec<Note>>;
    /// Creates an empty note owned by the current user.
    fn create(&mut self) -> RepoResult<Note>;
    /// Replaces the stored note sharing `note.id`.
    fn update(&mut self, note: &Note) -> RepoResult<()>;
    fn delete(&mut self, note_id: &NoteId) -> RepoResult<()>;
    /// Removes one attachment from a note.
    fn detach_file(&mut self, note_id: &NoteId, filename: &str) -> RepoResult<()>;
}

/// Vec-backed note store scoped to one owner.
#[derive(Debug, Clone, Default)]
pub struct MemoryNoteRepository {
    owner: String,
    notes: Vec<Note>,
}

impl MemoryNoteRepository {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            notes: Vec::new(),
        }
    }

    /// Seeds the store; notes keep their own owner field.
    pub fn with_notes(owner: impl Into<String>, notes: Vec<Note>) -> Self {
        Self {
            owner: owner.into(),
            notes,
        }
    }

    pub fn owner(&self) -> &str {
        self.owner.as_str()
    }

    fn position(&self, note_id: &NoteId) -> RepoResult<usize> {
        self.notes
            .iter()
            .position(|note| &note.id == note_id)
            .ok_or_else(|| RepoError::NoteNotFound(note_id.clone()))
    }
}

impl NoteRepository for MemoryNoteRepository {
    fn fetch_all(&self) -> RepoResult<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn create(&mut self) -> RepoResult<Note> {
        let note = Note::new(NoteId::generate(), self.owner.clone());
        self.notes.push(note.clone());
        Ok(note)
    }

    fn update(&mut self, note: &Note) -> RepoResult<()> {
        let index = self.position(&note.id)?;
        let mut stored = note.clone();
        stored.just_created = false;
        self.notes[index] = stored;
        Ok(())
    }

    fn delete(&mut self, note_id: &NoteId) -> RepoResult<()> {
        let index = self.position(note_id)?;
        self.notes.remove(index);
        Ok(())
    }

    fn detach_file(&mut self, note_id: &NoteId, filename: &str) -> RepoResult<()> {
        let index = self.position(note_id)?;
        if self.notes[index].remove_file(filename) {
            Ok(())
        } else {
            Err(RepoError::AttachmentNotFound {
                note_id: note_id.clone(),
                filename: filename.to_string(),
            })
        }
    }
}
