//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the fspath library against real temporary directories.

use std::fs;

use fspath::Path;
use tempfile::TempDir;

/// A temporary directory tree that is removed when dropped.
pub struct TestTree {
    // Held for its Drop; the tree lives as long as this value
    _dir: TempDir,
    root: Path,
}

impl TestTree {
    /// Creates an empty tree in a fresh temporary directory.
    ///
    /// The root is canonicalized so results of resolution compare equal to
    /// paths built from it.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let canonical = fs::canonicalize(dir.path()).expect("canonicalize temp dir");
        let root = Path::try_from(canonical).expect("temp dir is UTF-8");
        Self { _dir: dir, root }
    }

    /// The root of the tree.
    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `relative` joined onto the root.
    #[allow(dead_code)]
    pub fn path(&self, relative: &str) -> Path {
        &self.root + relative
    }

    /// Creates a file with `contents`, along with its parent directories.
    #[allow(dead_code)]
    pub fn file(&self, relative: &str, contents: &str) -> Path {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().as_std_path()).expect("create parents");
        fs::write(path.as_std_path(), contents).expect("write file");
        path
    }

    /// Creates a directory, along with its parents.
    #[allow(dead_code)]
    pub fn dir(&self, relative: &str) -> Path {
        let path = self.path(relative);
        fs::create_dir_all(path.as_std_path()).expect("create dir");
        path
    }

    /// Reads a file in the tree.
    #[allow(dead_code)]
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative).as_std_path()).expect("read file")
    }
}

/// Sorted copy of `paths`, for comparisons that ignore listing order.
#[allow(dead_code)]
pub fn sorted(mut paths: Vec<Path>) -> Vec<Path> {
    paths.sort();
    paths
}
