//! Isolated environment for running the `note` binary.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Result of running a note CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Temporary home with its own config and data directories.
pub struct TestEnv {
    pub home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("Failed to create temp home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_note")),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.path().join(".config").join("note")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.home.path().join(".local").join("share").join("note")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join("config.toml")
    }

    /// Write `config.toml` before the first run
    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(self.config_dir()).expect("Failed to create config dir");
        std::fs::write(self.config_file(), content).expect("Failed to write config");
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .args(args)
            .env("NOTE_TEST_HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("XDG_DATA_HOME", self.home.path().join(".local").join("share"))
            .env("EDITOR", "nano")
            .env_remove("NOTE_EDITOR")
            .env_remove("VISUAL")
            .env_remove("NOTE_NOTES_DIR")
            .env_remove("NOTE_ARCHIVE_DIR")
            .env_remove("NOTE_LOG")
            .output()
            .expect("Failed to execute note");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
