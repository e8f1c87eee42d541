//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{note_home_dir, NOTE_TEST_HOME_VAR};
pub use local::LocalFs;
