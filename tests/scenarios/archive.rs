//! Scenario: Archiving finished work
//!
//! Journey: a user archives a note and a whole folder, then reuses the
//! folder name. Archived items leave the tree but stay on disk.

use crossterm::event::KeyCode;

use crate::common::notes::*;

#[test]
fn scenario_archive_note_moves_it_out_of_the_tree() {
    let notes = NotesFixture::new();
    notes
        .write("a.md", "# Alpha\n")
        .write("b.md", "# Beta\n")
        .write("c.md", "# Gamma\n");
    let mut session = notes.session();

    press(&mut session, "j");
    session.handle_key(key(KeyCode::Backspace));

    assert!(!notes.path("b.md").exists());
    let archived = notes.archive().join("2024-03-01-093000-b.md");
    assert_eq!(std::fs::read_to_string(archived).unwrap(), "# Beta\n");

    // The archive folder itself is never listed
    assert_eq!(titles(&session), vec!["Alpha", "Gamma"]);
    assert_eq!(selected_title(&session).as_deref(), Some("Alpha"));
}

#[test]
fn scenario_archive_folder_forgets_its_expansion() {
    let notes = NotesFixture::new();
    notes.write("a.md", "# Alpha\n").write("work/plan.md", "# Plan\n");
    let mut session = notes.session();

    press(&mut session, "jl");
    assert_eq!(titles(&session), vec!["Alpha", "work", "Plan"]);

    session.handle_key(key(KeyCode::Delete));
    assert!(notes.archive().join("2024-03-01-093000-work/plan.md").is_file());
    assert_eq!(titles(&session), vec!["Alpha"]);

    // A new folder under the old name starts collapsed
    notes.write("work/next.md", "# Next\n");
    press(&mut session, "n");
    assert_eq!(titles(&session), vec!["Alpha", "New Note", "work"]);
    let work = &session.tree().entries()[2];
    assert!(work.is_directory());
    assert!(!work.is_expanded());
}

#[test]
fn scenario_archive_collision_is_reported() {
    let notes = NotesFixture::new();
    notes.write("a.md", "# Alpha\n");
    let mut session = notes.session();

    session.handle_key(key(KeyCode::Backspace));
    assert!(session.tree().is_empty());
    assert_eq!(session.tree().cursor(), None);

    // Same name archived again within the same second
    notes.write("a.md", "# Alpha again\n");
    press(&mut session, "n");
    press(&mut session, "k");
    assert_eq!(selected_title(&session).as_deref(), Some("Alpha again"));
    session.handle_key(key(KeyCode::Backspace));

    assert!(session
        .status()
        .is_some_and(|s| s.starts_with("already exists")));
    assert!(notes.path("a.md").is_file());
    assert_eq!(
        std::fs::read_to_string(notes.archive().join("2024-03-01-093000-a.md")).unwrap(),
        "# Alpha\n"
    );
}

#[test]
fn scenario_archive_on_empty_tree_does_nothing() {
    let notes = NotesFixture::new();
    let mut session = notes.session();

    session.handle_key(key(KeyCode::Backspace));

    assert!(session.tree().is_empty());
    assert_eq!(session.status(), None);
    assert!(!notes.archive().exists());
}
