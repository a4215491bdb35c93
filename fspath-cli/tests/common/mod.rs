//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary working directory
//! - Command builder helpers
//! - Fixture creation and output parsing

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment rooted at a fresh temporary directory.
///
/// Commands built from it run with that directory as their working
/// directory and with the option environment variables cleared.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        Self { temp_dir, root }
    }

    /// Get a command builder for the fspath binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("fspath").expect("Failed to find fspath binary");
        cmd.current_dir(&self.root)
            .env_remove("FSPATH_NO_TILDE")
            .env_remove("FSPATH_NO_HIDDEN")
            .env_remove("FSPATH_OUTPUT_FORMAT")
            .env_remove("FSPATH_LOG_MODE");
        cmd
    }

    /// Absolute path of `rel` inside the environment.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Absolute path of `rel` as a string, the way the CLI prints it.
    pub fn display(&self, rel: &str) -> String {
        self.path(rel).to_string_lossy().into_owned()
    }

    /// Create a file with `contents`, creating parents as needed.
    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a directory, including parents.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Read a file inside the environment.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("Failed to read test file")
    }

    /// Run the command with `args` and return its stdout lines, asserting success.
    pub fn lines(&self, args: &[&str]) -> Vec<String> {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run fspath");

        assert!(
            output.status.success(),
            "fspath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort lines for order-independent comparison.
#[allow(dead_code)]
pub fn sorted(mut lines: Vec<String>) -> Vec<String> {
    lines.sort();
    lines
}

/// Whether `path` is a symlink, without following it.
#[allow(dead_code)]
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
}
