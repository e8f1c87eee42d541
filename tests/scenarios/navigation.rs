//! Scenario: Moving around a nested tree

use crossterm::event::KeyCode;

use note::ui::browser::Outcome;

use crate::common::notes::*;

fn nested() -> NotesFixture {
    let notes = NotesFixture::new();
    notes
        .write("work/meetings/monday.md", "# Monday\n")
        .write("work/plan.md", "# Plan\n")
        .write("zen.md", "# Zen\n");
    notes
}

#[test]
fn scenario_collapse_from_deep_note_selects_parent() {
    let notes = nested();
    let mut session = notes.session();

    press(&mut session, "ljl");
    assert_eq!(
        titles(&session),
        vec!["work", "meetings", "Monday", "Plan", "Zen"]
    );

    press(&mut session, "j");
    assert_eq!(selected_title(&session).as_deref(), Some("Monday"));

    press(&mut session, "h");
    assert_eq!(titles(&session), vec!["work", "meetings", "Plan", "Zen"]);
    assert_eq!(selected_title(&session).as_deref(), Some("meetings"));

    // From a note directly under work, work folds
    press(&mut session, "j");
    assert_eq!(selected_title(&session).as_deref(), Some("Plan"));
    press(&mut session, "h");
    assert_eq!(titles(&session), vec!["work", "Zen"]);
    assert_eq!(selected_title(&session).as_deref(), Some("work"));

    // A top-level note has no folder to collapse
    press(&mut session, "jh");
    assert_eq!(titles(&session), vec!["work", "Zen"]);
    assert_eq!(selected_title(&session).as_deref(), Some("Zen"));
}

#[test]
fn scenario_cursor_stops_at_both_ends() {
    let notes = nested();
    let mut session = notes.session();

    press(&mut session, "kkk");
    assert_eq!(session.tree().cursor(), Some(0));

    session.handle_key(key(KeyCode::Down));
    session.handle_key(key(KeyCode::Down));
    session.handle_key(key(KeyCode::Down));
    assert_eq!(session.tree().cursor(), Some(1));
    assert_eq!(selected_title(&session).as_deref(), Some("Zen"));
}

#[test]
fn scenario_preview_follows_the_cursor() {
    let notes = nested();
    let mut session = notes.session();

    press(&mut session, "j");
    assert!(session.preview().content().contains("Zen"));

    notes.write("zen.md", "# Zen\n\nbreathe\n");
    press(&mut session, "kj");
    assert!(session.preview().content().contains("breathe"));
}

#[test]
fn scenario_tab_and_quit() {
    let notes = nested();
    let mut session = notes.session();
    assert!(session.show_sidebar());

    session.handle_key(key(KeyCode::Tab));
    assert!(!session.show_sidebar());

    assert_eq!(press(&mut session, "q"), Outcome::Quit);
    assert_eq!(session.handle_key(ctrl('c')), Outcome::Quit);
}
