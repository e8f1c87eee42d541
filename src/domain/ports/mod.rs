//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod file_system;
pub mod markdown_renderer;

pub use clock::Clock;
pub use file_system::{ChildKind, DirChild, FileSystem, FsError, FsResult};
pub use markdown_renderer::{render_or_raw, MarkdownRenderer, RenderError};
