//! The interactive note browser.
//!
//! Owns the terminal for the lifetime of the session: raw mode and the
//! alternate screen are entered once and restored on every exit path,
//! including errors, via [`TerminalGuard`]. The editor is run with the
//! terminal handed back in cooked mode.

use std::io::{self, Stdout, Write};
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::application::NoteTree;
use crate::config::{resolve_editor, Config};
use crate::infrastructure::editor::launch_editor;
use crate::infrastructure::{LocalFs, SystemClock, TerminalMarkdown};
use crate::ui::browser::{paint, render_view, Outcome, Session};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::{Glyphs, Palette};

/// Restores the terminal when dropped
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { stdout })
    }

    /// Give the terminal to a child process until `resume` is called
    fn suspend(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    fn resume(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = self.stdout.flush();
    }
}

/// Run the browser over `config.notes_dir` until the user quits.
pub fn cmd_browse(config: &Config) -> Result<()> {
    let caps = detect_capabilities();
    if !caps.is_tty {
        anyhow::bail!("note needs an interactive terminal");
    }

    let fs = LocalFs::new();
    let tree = NoteTree::open(&fs, &config.notes_dir, &config.archive_dir)
        .with_context(|| format!("cannot read notes directory {}", config.notes_dir.display()))?;
    tracing::info!(
        root = %config.notes_dir.display(),
        entries = tree.len(),
        "opened note tree"
    );

    let session = Session::new(
        tree,
        Box::new(fs),
        Box::new(SystemClock),
        Box::new(TerminalMarkdown::new()),
        config.layout,
        (caps.width, caps.height),
    );

    let editor = resolve_editor(&config.editor, &|key: &str| std::env::var(key).ok(), Path::exists);
    let palette = Palette::from_config(&config.theme);
    run_loop(session, &caps, &palette, &editor)
}

fn run_loop(
    mut session: Session,
    caps: &TerminalCapabilities,
    palette: &Palette,
    editor: &str,
) -> Result<()> {
    let glyphs = Glyphs::new(caps.supports_unicode);
    let mut guard = TerminalGuard::enter().context("cannot initialise the terminal")?;

    loop {
        let (width, height) = session.size();
        let frame = render_view(&session, &glyphs, usize::from(width), usize::from(height));
        paint(&mut guard.stdout, &frame, palette, caps.supports_color)?;

        let outcome = match event::read()? {
            Event::Key(key) => session.handle_key(key),
            Event::Resize(width, height) => {
                session.resize(width, height);
                Outcome::Continue
            }
            _ => Outcome::Continue,
        };

        match outcome {
            Outcome::Continue => {}
            Outcome::Quit => break,
            Outcome::LaunchEditor(path) => {
                guard.suspend()?;
                run_editor(editor, &path);
                guard.resume()?;
                if let Ok((width, height)) = terminal::size() {
                    session.resize(width, height);
                }
                session.resume_after_editor();
            }
        }
    }

    tracing::info!("browser closed");
    Ok(())
}

/// A failing editor is not fatal: the tree is rebuilt either way.
fn run_editor(editor: &str, path: &Path) {
    match launch_editor(editor, path) {
        Ok(status) if status.success() => {}
        Ok(status) => tracing::info!(%status, path = %path.display(), "editor exited unsuccessfully"),
        Err(e) => tracing::warn!(error = %e, path = %path.display(), "could not launch editor"),
    }
}
