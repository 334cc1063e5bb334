//! Membership mutations over `ViewCollection`.

use crate::model::note::{Note, NoteId};
use crate::model::view::{
    is_reserved_name, normalize_view_name, NamedView, View, ViewCollection, ViewError,
};
use log::debug;

impl ViewCollection {
    /// Creates an empty named view at the end of the collection.
    pub fn create_view(&mut self, name: &str) -> Result<&NamedView, ViewError> {
        let normalized = normalize_view_name(name)?;
        if self.find(&normalized).is_some() {
            return Err(ViewError::DuplicateName(normalized));
        }

        self.named.push(NamedView::new(&normalized)?);
        let index = self.named.len() - 1;
        Ok(&self.named[index])
    }

    /// Appends `note_id` to the named view.
    ///
    /// Returns `Ok(false)` when the note is already a member.
    pub fn insert_note(&mut self, view_name: &str, note_id: &NoteId) -> Result<bool, ViewError> {
        let view = self.resolve_mut(view_name)?;
        Ok(view.push_note(note_id.clone()))
    }

    /// Removes `note_id` from the named view.
    ///
    /// Returns `Ok(false)` when the note was not a member.
    pub fn remove_note(&mut self, view_name: &str, note_id: &NoteId) -> Result<bool, ViewError> {
        let view = self.resolve_mut(view_name)?;
        Ok(view.drop_note(note_id))
    }

    fn resolve_mut(&mut self, view_name: &str) -> Result<&mut NamedView, ViewError> {
        if is_reserved_name(view_name) {
            return Err(ViewError::ReservedView);
        }
        self.find_mut(view_name)
            .ok_or_else(|| ViewError::ViewNotFound(view_name.to_string()))
    }
}

/// Adds `note_id` to the view named `view_name` and returns the new collection.
///
/// Already-present ids, unknown view names and the reserved view leave the
/// collection unchanged.
pub fn add_note_to_view(
    mut views: ViewCollection,
    view_name: &str,
    note_id: &NoteId,
) -> ViewCollection {
    match views.insert_note(view_name, note_id) {
        Ok(true) => debug!("event=view_add module=views status=ok"),
        Ok(false) => debug!("event=view_add module=views status=skipped reason=already_member"),
        Err(err) => debug!("event=view_add module=views status=skipped reason=\"{err}\""),
    }
    views
}

/// Hides `note_id` from the active view.
///
/// Returns the updated collection together with the refreshed snapshot of the
/// active view. Inputs come back unchanged when there is no active view, when
/// it is `View::AllNotes`, when it is missing from `views`, or when the note is
/// not a member.
pub fn remove_note_from_view(
    mut views: ViewCollection,
    active: Option<View>,
    note_id: &NoteId,
) -> (ViewCollection, Option<View>) {
    let active_name = match active.as_ref() {
        Some(View::Named(view)) => view.name().to_string(),
        Some(View::AllNotes) | None => {
            debug!("event=view_hide module=views status=skipped reason=no_named_view");
            return (views, active);
        }
    };

    match views.remove_note(&active_name, note_id) {
        Ok(true) => {
            debug!("event=view_hide module=views status=ok");
            let refreshed = views.find(&active_name).cloned().map(View::Named);
            (views, refreshed)
        }
        Ok(false) => {
            debug!("event=view_hide module=views status=skipped reason=not_member");
            (views, active)
        }
        Err(err) => {
            debug!("event=view_hide module=views status=skipped reason=\"{err}\"");
            (views, active)
        }
    }
}

/// Keeps the notes shown by `view`, preserving collection order.
pub fn restrict_to_view(notes: &[Note], view: &View) -> Vec<Note> {
    match view {
        View::AllNotes => notes.to_vec(),
        View::Named(named) => notes
            .iter()
            .filter(|note| named.contains(&note.id))
            .cloned()
            .collect(),
    }
}
