//! Scenario: Organizing loose notes into folders
//!
//! Journey: a user with a single note creates a folder, names it,
//! writes a note inside it and folds the folder away again.

use crossterm::event::KeyCode;

use note::ui::browser::Mode;

use crate::common::notes::*;

#[test]
fn scenario_create_and_name_a_folder_then_fill_it() {
    let notes = NotesFixture::new();
    notes.write("inbox.md", "# Inbox\n");
    let mut session = notes.session();
    assert_eq!(selected_title(&session).as_deref(), Some("Inbox"));

    // New folder lands next to the selected top-level note, named by the prompt
    press(&mut session, "N");
    assert_eq!(
        session.mode(),
        &Mode::Renaming {
            target: notes.path("New Folder")
        }
    );
    assert_eq!(session.input().value(), "New Folder");

    session.handle_key(ctrl('u'));
    press(&mut session, "Projects");
    session.handle_key(key(KeyCode::Enter));

    assert_eq!(session.mode(), &Mode::Normal);
    assert!(notes.path("Projects").is_dir());
    assert!(!notes.path("New Folder").exists());
    assert_eq!(selected_title(&session).as_deref(), Some("Projects"));

    // A note created with the folder selected goes inside it
    press(&mut session, "n");
    let created = notes.path("Projects/note-2024-03-01-093000.md");
    assert!(created.is_file());
    assert_eq!(titles(&session), vec!["Projects", "New Note", "Inbox"]);
    assert_eq!(selected_title(&session).as_deref(), Some("New Note"));

    // Collapsing from the note folds the folder and selects it
    press(&mut session, "h");
    assert_eq!(titles(&session), vec!["Projects", "Inbox"]);
    assert_eq!(selected_title(&session).as_deref(), Some("Projects"));

    // Expansion is remembered by path
    press(&mut session, "l");
    assert_eq!(titles(&session), vec!["Projects", "New Note", "Inbox"]);
    assert_eq!(selected_title(&session).as_deref(), Some("Projects"));
}

#[test]
fn scenario_new_folders_are_numbered() {
    let notes = NotesFixture::new();
    notes.mkdir("New Folder").write("z.md", "# Zed\n");
    let mut session = notes.session();

    press(&mut session, "j");
    press(&mut session, "N");
    session.handle_key(key(KeyCode::Esc));
    assert!(notes.path("New Folder 1").is_dir());
    assert_eq!(selected_title(&session).as_deref(), Some("New Folder 1"));

    press(&mut session, "j");
    assert_eq!(selected_title(&session).as_deref(), Some("Zed"));
    press(&mut session, "N");
    session.handle_key(key(KeyCode::Esc));
    assert!(notes.path("New Folder 2").is_dir());

    assert_eq!(
        titles(&session),
        vec!["New Folder", "New Folder 1", "New Folder 2", "Zed"]
    );
}

#[test]
fn scenario_rename_keeps_folder_open() {
    let notes = NotesFixture::new();
    notes.write("drafts/post.md", "# Post\n");
    let mut session = notes.session();

    press(&mut session, "l");
    assert_eq!(titles(&session), vec!["drafts", "Post"]);

    session.handle_key(key(KeyCode::Enter));
    assert_eq!(session.input().value(), "drafts");
    session.handle_key(ctrl('u'));
    press(&mut session, "published");
    session.handle_key(key(KeyCode::Enter));

    assert!(notes.path("published/post.md").is_file());
    assert_eq!(titles(&session), vec!["published", "Post"]);
    assert_eq!(selected_title(&session).as_deref(), Some("published"));
}

#[test]
fn scenario_invalid_name_is_reported_and_nothing_moves() {
    let notes = NotesFixture::new();
    notes.mkdir("ideas");
    let mut session = notes.session();

    session.handle_key(key(KeyCode::Enter));
    session.handle_key(ctrl('u'));
    press(&mut session, "a/b");
    session.handle_key(key(KeyCode::Enter));

    assert_eq!(session.mode(), &Mode::Normal);
    assert!(notes.path("ideas").is_dir());
    assert!(session.status().is_some_and(|s| s.contains("invalid name")));

    // The message lasts until the next key
    press(&mut session, "j");
    assert_eq!(session.status(), None);
}
