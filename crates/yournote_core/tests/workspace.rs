use yournote_core::{
    FilterSpec, MemoryNoteRepository, MemoryViewRepository, NamedView, Note, NoteId,
    NotesWorkspace, RepoError, SearchFields, SyncMode, View, ViewCollection, ViewError,
    WorkspaceConfig, WorkspaceError,
};

const OWNER: &str = "me@example.com";

type Workspace = NotesWorkspace<MemoryNoteRepository, MemoryViewRepository>;

fn note(id: &str) -> Note {
    Note::new(NoteId::new(id), OWNER)
}

fn ids(notes: &[Note]) -> Vec<&str> {
    notes.iter().map(|note| note.id.as_str()).collect()
}

fn seeded_notes() -> Vec<Note> {
    vec![
        note("a").with_title("Groceries").with_color("red"),
        note("b").with_title("Work plan").with_color("blue"),
        Note::new(NoteId::new("c"), "friend@example.com").with_content("shared recipe"),
    ]
}

fn seeded_views() -> ViewCollection {
    ViewCollection::from_named(vec![
        NamedView::with_notes("Work", vec![NoteId::new("b")]).unwrap(),
        NamedView::new("Later").unwrap(),
    ])
    .unwrap()
}

fn open_with(config: WorkspaceConfig) -> Workspace {
    NotesWorkspace::open(
        MemoryNoteRepository::with_notes(OWNER, seeded_notes()),
        MemoryViewRepository::new(seeded_views()),
        OWNER,
        config,
    )
    .unwrap()
}

fn open() -> Workspace {
    open_with(WorkspaceConfig::default())
}

fn open_identifier_diff() -> Workspace {
    open_with(WorkspaceConfig::default().with_sync_mode(SyncMode::IdentifierDiff))
}

#[test]
fn open_shows_everything_under_all_notes() {
    let workspace = open();
    assert_eq!(ids(workspace.visible()), vec!["a", "b", "c"]);
    assert_eq!(workspace.selected_view(), Some(&View::AllNotes));
    assert!(workspace.filter().is_identity());
    assert_eq!(workspace.views().len(), 3);
}

#[test]
fn displayed_splits_mine_from_shared() {
    let workspace = open();
    let displayed = workspace.displayed();
    assert_eq!(ids(&displayed.mine), vec!["a", "b"]);
    assert_eq!(ids(&displayed.shared), vec!["c"]);
}

#[test]
fn create_note_appends_and_flags_it() {
    let mut workspace = open();
    let created = workspace.create_note().unwrap();

    assert!(created.just_created);
    assert_eq!(created.owner, OWNER);
    assert_eq!(workspace.notes().len(), 4);
    let last = workspace.visible().last().unwrap();
    assert_eq!(last.id, created.id);
    assert!(last.just_created);

    workspace.acknowledge_created(&created.id);
    assert!(!workspace.note(&created.id).unwrap().just_created);
}

#[test]
fn created_note_stays_visible_under_active_filter() {
    let mut workspace = open_identifier_diff();
    workspace.apply_filter(FilterSpec::new().with_query("groc"));
    assert_eq!(ids(workspace.visible()), vec!["a"]);

    let created = workspace.create_note().unwrap();
    assert_eq!(ids(workspace.visible()), vec!["a", created.id.as_str()]);
}

#[test]
fn count_mode_keeps_created_note_visible_under_filter() {
    let mut workspace = open();
    workspace.apply_filter(FilterSpec::new().with_query("groc"));

    let created = workspace.create_note().unwrap();
    assert!(workspace.visible().iter().any(|note| note.id == created.id));
}

#[test]
fn delete_note_removes_it_from_both_lists() {
    let mut workspace = open();
    workspace.delete_note(&NoteId::new("b")).unwrap();

    assert_eq!(ids(workspace.notes()), vec!["a", "c"]);
    assert_eq!(ids(workspace.visible()), vec!["a", "c"]);
}

#[test]
fn deleted_note_leaves_filtered_list_in_count_mode() {
    let mut workspace = open();
    workspace.apply_filter(FilterSpec::new().with_colors(["red", "blue"]));
    assert_eq!(ids(workspace.visible()), vec!["a", "b"]);

    let deleted = NoteId::new("a");
    workspace.delete_note(&deleted).unwrap();

    assert_eq!(ids(workspace.notes()), vec!["b", "c"]);
    // The count changed, so the heuristic diff re-shows the filtered-out note.
    assert_eq!(ids(workspace.visible()), vec!["b", "c"]);
    assert_eq!(ids(&workspace.displayed().mine), vec!["b"]);
    assert_eq!(
        workspace.update_note(Note::new(deleted.clone(), OWNER)),
        Err(WorkspaceError::NoteNotFound(deleted))
    );
}

#[test]
fn deleted_note_leaves_filtered_list_in_identifier_mode() {
    let mut workspace = open_identifier_diff();
    workspace.apply_filter(FilterSpec::new().with_colors(["red", "blue"]));

    workspace.delete_note(&NoteId::new("a")).unwrap();
    assert_eq!(ids(workspace.visible()), vec!["b"]);
}

#[test]
fn missing_note_is_reported() {
    let mut workspace = open();
    let missing = NoteId::new("zzz");

    assert_eq!(
        workspace.delete_note(&missing),
        Err(WorkspaceError::NoteNotFound(missing.clone()))
    );
    assert_eq!(
        workspace.attach_file(&missing, "a.png"),
        Err(WorkspaceError::NoteNotFound(missing.clone()))
    );
    assert_eq!(
        workspace.update_note(Note::new(missing.clone(), OWNER)),
        Err(WorkspaceError::NoteNotFound(missing))
    );
}

#[test]
fn update_note_replaces_in_place() {
    let mut workspace = open();
    let edited = workspace
        .note(&NoteId::new("a"))
        .unwrap()
        .clone()
        .with_title("Groceries for Sunday");
    workspace.update_note(edited).unwrap();

    assert_eq!(ids(workspace.visible()), vec!["a", "b", "c"]);
    assert_eq!(
        workspace.visible()[0].title.as_deref(),
        Some("Groceries for Sunday")
    );
}

#[test]
fn attach_then_detach_file() {
    let mut workspace = open();
    let id = NoteId::new("a");
    workspace.attach_file(&id, "receipt.png").unwrap();
    workspace.attach_file(&id, "list.txt").unwrap();
    assert_eq!(
        workspace.note(&id).unwrap().files,
        vec!["receipt.png".to_string(), "list.txt".to_string()]
    );

    workspace.detach_file(&id, "receipt.png").unwrap();
    assert_eq!(workspace.note(&id).unwrap().files, vec!["list.txt".to_string()]);
    assert_eq!(workspace.visible()[0].files, vec!["list.txt".to_string()]);

    assert_eq!(
        workspace.detach_file(&id, "receipt.png"),
        Err(WorkspaceError::Repo(RepoError::AttachmentNotFound {
            note_id: id.clone(),
            filename: "receipt.png".to_string(),
        }))
    );
}

#[test]
fn apply_and_clear_filter() {
    let mut workspace = open();
    let spec = FilterSpec::new()
        .with_query("re")
        .with_fields(SearchFields {
            titles: false,
            contents: true,
            tags: false,
        });
    workspace.apply_filter(spec.clone());
    assert_eq!(ids(workspace.visible()), vec!["c"]);
    assert_eq!(workspace.filter(), &spec);

    workspace.apply_filter(FilterSpec::new().with_colors(["RED", "blue"]));
    assert_eq!(ids(workspace.visible()), vec!["a", "b"]);

    workspace.clear_filter();
    assert_eq!(ids(workspace.visible()), vec!["a", "b", "c"]);
}

#[test]
fn selected_view_restricts_displayed_notes() {
    let mut workspace = open();
    let selected = workspace.select_view("Work").unwrap();
    assert_eq!(selected.name(), "Work");
    assert_eq!(ids(&workspace.displayed().mine), vec!["b"]);
    assert!(workspace.displayed().shared.is_empty());

    assert_eq!(workspace.select_view("all notes").unwrap(), &View::AllNotes);
    assert_eq!(
        workspace.select_view("Nope"),
        Err(WorkspaceError::View(ViewError::ViewNotFound("Nope".to_string())))
    );
}

#[test]
fn add_to_view_persists_only_on_change() {
    let mut workspace = open();
    workspace.select_view("Later").unwrap();

    assert_eq!(workspace.add_to_view("Later", &NoteId::new("a")), Ok(true));
    assert_eq!(workspace.add_to_view("Later", &NoteId::new("a")), Ok(false));
    assert_eq!(workspace.add_to_view("All notes", &NoteId::new("a")), Ok(false));

    assert_eq!(ids(&workspace.displayed().mine), vec!["a"]);
    assert_eq!(
        workspace.views().find("Later").unwrap().notes(),
        &[NoteId::new("a")]
    );
}

#[test]
fn add_to_view_matches_names_case_insensitively() {
    let mut workspace = open();
    workspace.select_view("Later").unwrap();

    assert_eq!(workspace.add_to_view("  later ", &NoteId::new("b")), Ok(true));
    assert_eq!(
        workspace.views().find("Later").unwrap().notes(),
        &[NoteId::new("b")]
    );
    assert_eq!(ids(&workspace.displayed().mine), vec!["b"]);
}

#[test]
fn hide_from_view_updates_selection() {
    let mut workspace = open();
    workspace.select_view("Work").unwrap();

    assert_eq!(workspace.hide_from_view(&NoteId::new("b")), Ok(true));
    assert!(workspace.displayed().mine.is_empty());
    assert!(workspace.views().find("Work").unwrap().notes().is_empty());
    assert_eq!(workspace.hide_from_view(&NoteId::new("b")), Ok(false));
}

#[test]
fn hide_is_disabled_on_all_notes() {
    let mut workspace = open();
    assert_eq!(workspace.hide_from_view(&NoteId::new("a")), Ok(false));
    assert_eq!(ids(workspace.visible()), vec!["a", "b", "c"]);
}

#[test]
fn create_view_rejects_reserved_and_duplicate_names() {
    let mut workspace = open();
    let created = workspace.create_view("  Travel   plans ").unwrap();
    assert_eq!(created.name(), "Travel plans");
    let names: Vec<_> = workspace.add_targets().iter().map(|view| view.name()).collect();
    assert_eq!(names, vec!["Work", "Later", "Travel plans"]);

    assert_eq!(
        workspace.create_view("All Notes"),
        Err(WorkspaceError::View(ViewError::ReservedName))
    );
    assert_eq!(
        workspace.create_view("work"),
        Err(WorkspaceError::View(ViewError::DuplicateName("work".to_string())))
    );
}

#[test]
fn refresh_picks_up_store_changes() {
    let mut workspace = open_identifier_diff();
    workspace.refresh().unwrap();
    assert_eq!(ids(workspace.visible()), vec!["a", "b", "c"]);
}
