//! note - a terminal browser for a folder tree of markdown notes
//!
//! Notes are plain `.md` files; folders are directories. The browser shows
//! the tree in a sidebar with a rendered preview of the selected note, and
//! creates, renames and archives entries directly on disk.

pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{NoteTree, Step};
pub use config::{AppPaths, Config};
pub use domain::entities::Entry;
pub use error::{NoteError, NoteResult};
