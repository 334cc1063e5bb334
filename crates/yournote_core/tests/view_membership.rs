use yournote_core::{
    add_note_to_view, remove_note_from_view, NamedView, NoteId, View, ViewCollection, ViewError,
};

fn sample_views() -> ViewCollection {
    ViewCollection::from_named(vec![
        NamedView::with_notes("Work", vec![NoteId::new("1"), NoteId::new("2")]).unwrap(),
        NamedView::new("Personal").unwrap(),
    ])
    .unwrap()
}

#[test]
fn add_is_idempotent() {
    let id = NoteId::new("9");
    let once = add_note_to_view(sample_views(), "Personal", &id);
    assert_eq!(once.find("Personal").unwrap().notes(), &[id.clone()]);

    let twice = add_note_to_view(once.clone(), "Personal", &id);
    assert_eq!(twice, once);
    assert_eq!(twice.find("Personal").unwrap().notes().len(), 1);
}

#[test]
fn add_appends_at_end_and_leaves_other_views_alone() {
    let updated = add_note_to_view(sample_views(), "Work", &NoteId::new("3"));
    assert_eq!(
        updated.find("Work").unwrap().notes(),
        &[NoteId::new("1"), NoteId::new("2"), NoteId::new("3")]
    );
    assert!(updated.find("Personal").unwrap().notes().is_empty());
}

#[test]
fn add_resolves_view_name_like_uniqueness_check() {
    let id = NoteId::new("3");
    let updated = add_note_to_view(sample_views(), "work", &id);
    assert!(updated.find("Work").unwrap().contains(&id));

    let updated = add_note_to_view(sample_views(), "  PERSONAL ", &id);
    assert_eq!(updated.find("Personal").unwrap().notes(), &[id]);
}

#[test]
fn add_to_reserved_or_missing_view_is_noop() {
    let id = NoteId::new("1");
    assert_eq!(add_note_to_view(sample_views(), "All notes", &id), sample_views());
    assert_eq!(add_note_to_view(sample_views(), "Archive", &id), sample_views());
}

#[test]
fn remove_from_reserved_view_is_noop() {
    let (views, active) =
        remove_note_from_view(sample_views(), Some(View::AllNotes), &NoteId::new("1"));
    assert_eq!(views, sample_views());
    assert_eq!(active, Some(View::AllNotes));
}

#[test]
fn remove_without_active_view_is_noop() {
    let (views, active) = remove_note_from_view(sample_views(), None, &NoteId::new("1"));
    assert_eq!(views, sample_views());
    assert!(active.is_none());
}

#[test]
fn remove_updates_collection_and_active_snapshot() {
    let views = sample_views();
    let active = views.select("Work");
    let (views, active) = remove_note_from_view(views, active, &NoteId::new("1"));

    assert_eq!(views.find("Work").unwrap().notes(), &[NoteId::new("2")]);
    let Some(View::Named(active)) = active else {
        panic!("active view should stay a named view");
    };
    assert_eq!(active.notes(), &[NoteId::new("2")]);
}

#[test]
fn remove_non_member_leaves_membership_untouched() {
    let views = sample_views();
    let active = views.select("Work");
    let (updated, refreshed) =
        remove_note_from_view(views.clone(), active.clone(), &NoteId::new("7"));
    assert_eq!(updated, views);
    assert_eq!(refreshed, active);
}

#[test]
fn stale_active_view_missing_from_collection_is_noop() {
    let stale = View::Named(NamedView::with_notes("Gone", vec![NoteId::new("1")]).unwrap());
    let (views, active) =
        remove_note_from_view(sample_views(), Some(stale.clone()), &NoteId::new("1"));
    assert_eq!(views, sample_views());
    assert_eq!(active, Some(stale));
}

#[test]
fn add_targets_exclude_reserved_view() {
    let views = sample_views();
    let names: Vec<_> = views.add_targets().iter().map(|view| view.name()).collect();
    assert_eq!(names, vec!["Work", "Personal"]);

    let all: Vec<_> = views.iter().map(|view| view.name().to_string()).collect();
    assert_eq!(all, vec!["All notes", "Work", "Personal"]);
    assert!(ViewCollection::new().add_targets().is_empty());
}

#[test]
fn user_views_cannot_take_reserved_name() {
    assert_eq!(NamedView::new("All notes"), Err(ViewError::ReservedName));
    let mut views = sample_views();
    assert_eq!(views.create_view("ALL NOTES").unwrap_err(), ViewError::ReservedName);
}

#[test]
fn all_notes_view_contains_every_note() {
    assert!(View::AllNotes.contains(&NoteId::new("anything")));
    assert!(View::AllNotes.is_all_notes());
}
