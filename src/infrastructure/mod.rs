//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system, home directory resolution
//! - `render/` - Markdown renderer
//! - `clock` - System clock
//! - `editor` - External editor process

pub mod clock;
pub mod editor;
pub mod fs;
pub mod render;

// Re-export for convenience
pub use clock::{FixedClock, SystemClock};
pub use fs::LocalFs;
pub use render::TerminalMarkdown;
