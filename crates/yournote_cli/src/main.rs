//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `yournote_core` linkage.
//! - Run one filter over a fixed in-memory note set with deterministic output.
//!
//! Usage: `yournote_cli [query] [color...]`. Set `YOURNOTE_LOG_DIR` to an
//! absolute directory to enable file logging.

use std::process::ExitCode;
use yournote_core::{
    init_logging, FilterSpec, LogSettings, MemoryNoteRepository, MemoryViewRepository, Note,
    NoteId, NotesWorkspace, ViewCollection, WorkspaceConfig,
};

const OWNER: &str = "demo@example.com";

fn seed_notes() -> Vec<Note> {
    vec![
        Note::new(NoteId::new("1"), OWNER)
            .with_title("Groceries")
            .with_color("red")
            .with_tags(["errands"]),
        Note::new(NoteId::new("2"), OWNER)
            .with_title("Work")
            .with_content("quarterly planning")
            .with_color("blue"),
        Note::new(NoteId::new("3"), "friend@example.com")
            .with_content("shared grocery list")
            .with_color("red"),
    ]
}

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("YOURNOTE_LOG_DIR") {
        if let Err(err) = init_logging(&LogSettings::new(log_dir)) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("yournote_core version={}", yournote_core::core_version());

    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_default();
    let spec = FilterSpec::new().with_query(query).with_colors(args);

    let mut workspace = match NotesWorkspace::open(
        MemoryNoteRepository::with_notes(OWNER, seed_notes()),
        MemoryViewRepository::new(ViewCollection::new()),
        OWNER,
        WorkspaceConfig::default(),
    ) {
        Ok(workspace) => workspace,
        Err(err) => {
            eprintln!("failed to open workspace: {err}");
            return ExitCode::FAILURE;
        }
    };

    workspace.apply_filter(spec);
    let displayed = workspace.displayed();
    log::info!(
        "event=cli_filter module=cli status=ok mine={} shared={}",
        displayed.mine.len(),
        displayed.shared.len()
    );

    println!("notes total={}", workspace.notes().len());
    for note in displayed.mine.iter().chain(displayed.shared.iter()) {
        println!(
            "{} owner={} title={}",
            note.id,
            note.owner,
            note.title.as_deref().unwrap_or("-")
        );
    }
    println!(
        "visible mine={} shared={}",
        displayed.mine.len(),
        displayed.shared.len()
    );
    ExitCode::SUCCESS
}
