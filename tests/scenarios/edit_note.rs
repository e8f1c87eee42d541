//! Scenario: Editing a note in the external editor
//!
//! The session hands the note to the event loop, ignores keys while the
//! editor runs, and picks up the new content when it returns.

use crossterm::event::KeyCode;

use note::ui::browser::{Mode, Outcome};

use crate::common::notes::*;

#[test]
fn scenario_edit_then_resume_shows_new_title() {
    let notes = NotesFixture::new();
    notes.write("a.md", "# Draft\n").write("b.md", "# Other\n");
    let mut session = notes.session();

    let outcome = session.handle_key(key(KeyCode::Enter));
    assert_eq!(outcome, Outcome::LaunchEditor(notes.path("a.md")));
    assert_eq!(
        session.mode(),
        &Mode::Suspended {
            path: notes.path("a.md")
        }
    );

    // Keys are ignored while the editor owns the terminal
    press(&mut session, "jq");
    assert_eq!(session.tree().cursor(), Some(0));

    // What the editor would have written
    std::fs::write(notes.path("a.md"), "# Final\n\ndone\n").unwrap();
    session.resume_after_editor();

    assert_eq!(session.mode(), &Mode::Normal);
    assert_eq!(titles(&session), vec!["Final", "Other"]);
    assert_eq!(selected_title(&session).as_deref(), Some("Final"));
    assert!(session.preview().content().contains("done"));
}

#[test]
fn scenario_note_deleted_while_editing_is_tolerated() {
    let notes = NotesFixture::new();
    notes.write("a.md", "# Draft\n").write("b.md", "# Other\n");
    let mut session = notes.session();

    session.handle_key(key(KeyCode::Enter));
    std::fs::remove_file(notes.path("a.md")).unwrap();
    session.resume_after_editor();

    assert_eq!(titles(&session), vec!["Other"]);
    assert_eq!(session.tree().cursor(), Some(0));
}
