//! Terminal user interface
//!
//! - `terminal` - capability detection (tty, color, unicode, size)
//! - `theme` - icons, borders and colors
//! - `browser` - the interactive note browser

pub mod browser;
pub mod terminal;
pub mod theme;
