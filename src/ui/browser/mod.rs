//! Note browser widget
//!
//! Sidebar tree, markdown preview and rename prompt over a `NoteTree`.
//!
//! # Module Structure
//!
//! - `session` - interaction state machine (Normal / Renaming / Suspended)
//! - `input` - Normal-mode key mapping
//! - `prompt` - single-line text input for renaming
//! - `preview` - scrollable, wrapped preview pane
//! - `render` - pure session-to-frame rendering
//! - `paint` - crossterm backend for frames

mod input;
mod paint;
mod preview;
mod prompt;
mod render;
mod session;

pub use input::{key_to_command, Command};
pub use paint::paint;
pub use preview::{wrap, Viewport};
pub use prompt::{TextInput, NAME_CHAR_LIMIT};
pub use render::{panes, render_view, Frame, Line, Panes, Rect, Span, Tone};
pub use session::{Mode, Outcome, Session};
