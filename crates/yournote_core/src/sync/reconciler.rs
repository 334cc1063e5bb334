//! Count-gated and id-diff reconciliation of the visible note list.

use crate::model::note::{Note, NoteId};
use log::{debug, trace};
use std::collections::HashSet;

/// Change detection strategy used by [`SyncController`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncMode {
    /// Diff only when the authoritative count differs from both the visible
    /// count and the last-seen authoritative count.
    ///
    /// Misses same-count replacements (one note removed while another is
    /// added between two calls).
    #[default]
    CountHeuristic,
    /// Diff on every call, tracking the last-seen authoritative ids so that
    /// notes hidden by an active filter are not re-shown.
    IdentifierDiff,
}

/// Ids added to and removed from the visible list by one reconcile call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncDelta {
    pub added: Vec<NoteId>,
    pub removed: Vec<NoteId>,
}

impl SyncDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Keeps a visible note list in step with the authoritative list.
///
/// Calls on one controller must come from a single logical sequence; the
/// `&mut self` receiver enforces that.
#[derive(Debug, Clone, Default)]
pub struct SyncController {
    mode: SyncMode,
    last_count: Option<usize>,
    last_ids: Option<HashSet<NoteId>>,
}

impl SyncController {
    pub fn new(mode: SyncMode) -> Self {
        Self {
            mode,
            last_count: None,
            last_ids: None,
        }
    }

    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    /// Authoritative count seen by the previous call, if any.
    pub fn last_count(&self) -> Option<usize> {
        self.last_count
    }

    /// Returns the new visible list.
    pub fn reconcile(&mut self, authoritative: &[Note], visible: &[Note]) -> Vec<Note> {
        self.reconcile_with_delta(authoritative, visible).0
    }

    /// Returns the new visible list and the ids it added and removed.
    pub fn reconcile_with_delta(
        &mut self,
        authoritative: &[Note],
        visible: &[Note],
    ) -> (Vec<Note>, SyncDelta) {
        let result = match self.mode {
            SyncMode::CountHeuristic => self.reconcile_by_count(authoritative, visible),
            SyncMode::IdentifierDiff => self.reconcile_by_ids(authoritative, visible),
        };

        self.last_count = Some(authoritative.len());
        if self.mode == SyncMode::IdentifierDiff {
            self.last_ids = Some(authoritative.iter().map(|note| note.id.clone()).collect());
        }

        if !result.1.is_empty() {
            debug!(
                "event=sync_reconcile module=sync status=ok mode={:?} added={} removed={} visible={}",
                self.mode,
                result.1.added.len(),
                result.1.removed.len(),
                result.0.len()
            );
        }
        result
    }

    fn reconcile_by_count(
        &self,
        authoritative: &[Note],
        visible: &[Note],
    ) -> (Vec<Note>, SyncDelta) {
        let count = authoritative.len();
        if count == visible.len() || self.last_count == Some(count) {
            trace!(
                "event=sync_reconcile module=sync status=skipped reason=same_count count={count}"
            );
            return (visible.to_vec(), SyncDelta::default());
        }

        let visible_ids = ids_of(visible);
        let added: Vec<&Note> = authoritative
            .iter()
            .filter(|note| !visible_ids.contains(&note.id))
            .collect();
        apply_diff(authoritative, visible, added)
    }

    fn reconcile_by_ids(
        &self,
        authoritative: &[Note],
        visible: &[Note],
    ) -> (Vec<Note>, SyncDelta) {
        let visible_ids = ids_of(visible);
        let added: Vec<&Note> = authoritative
            .iter()
            .filter(|note| !visible_ids.contains(&note.id))
            .filter(|note| {
                self.last_ids
                    .as_ref()
                    .map_or(true, |seen| !seen.contains(&note.id))
            })
            .collect();
        apply_diff(authoritative, visible, added)
    }
}

fn ids_of(notes: &[Note]) -> HashSet<&NoteId> {
    notes.iter().map(|note| &note.id).collect()
}

fn apply_diff(
    authoritative: &[Note],
    visible: &[Note],
    added: Vec<&Note>,
) -> (Vec<Note>, SyncDelta) {
    let authoritative_ids = ids_of(authoritative);
    let mut next = Vec::with_capacity(visible.len() + added.len());
    let mut delta = SyncDelta::default();

    for note in visible {
        if authoritative_ids.contains(&note.id) {
            next.push(note.clone());
        } else {
            delta.removed.push(note.id.clone());
        }
    }
    for note in added {
        delta.added.push(note.id.clone());
        next.push(note.clone());
    }

    (next, delta)
}

/// Appends a freshly created note, flagging it as just created.
pub fn append_created(notes: &[Note], mut note: Note) -> Vec<Note> {
    note.just_created = true;
    let mut next = notes.to_vec();
    next.push(note);
    next
}

/// Drops every entry with `note_id`.
pub fn drop_from_list(notes: &[Note], note_id: &NoteId) -> Vec<Note> {
    notes
        .iter()
        .filter(|note| &note.id != note_id)
        .cloned()
        .collect()
}

/// Replaces the entry sharing `note`'s id in place; unchanged when absent.
pub fn replace_note(notes: &[Note], note: &Note) -> Vec<Note> {
    notes
        .iter()
        .map(|current| {
            if current.id == note.id {
                note.clone()
            } else {
                current.clone()
            }
        })
        .collect()
}
