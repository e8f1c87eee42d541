//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on Windows, so integration tests set
//! `NOTE_TEST_HOME` instead. All functional paths (config file, default
//! notes directory) go through `note_home_dir()`.

use std::path::PathBuf;

/// Environment variable that overrides the home directory in tests.
pub const NOTE_TEST_HOME_VAR: &str = "NOTE_TEST_HOME";

/// Home directory for note's own paths.
///
/// - `Some(PathBuf)` - `NOTE_TEST_HOME` if set, else the system home
/// - `None` - neither could be resolved
pub fn note_home_dir() -> Option<PathBuf> {
    std::env::var(NOTE_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}
