//! Testing utilities for seqls
//!
//! Helpers for building scratch directory trees full of frame files,
//! backed by a temporary directory that cleans up on drop.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory populated with named files and subdirectories.
///
/// The directory is removed when the tree goes out of scope, so tests
/// leave no artifacts behind.
///
/// # Panics
/// Construction panics if the temporary directory or any entry cannot be
/// created; tests have nothing useful to do with such failures.
pub struct FrameTree {
    dir: TempDir,
}

impl FrameTree {
    /// Create a scratch tree containing empty files with the given names.
    #[must_use]
    pub fn new(files: &[&str]) -> Self {
        Self::with_dirs(files, &[])
    }

    /// Create a scratch tree containing empty files and subdirectories.
    #[must_use]
    pub fn with_dirs(files: &[&str], dirs: &[&str]) -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        for name in dirs {
            fs::create_dir(dir.path().join(name)).expect("Failed to create test directory");
        }
        for name in files {
            fs::write(dir.path().join(name), b"frame data").expect("Failed to create test file");
        }
        Self { dir }
    }

    /// Root of the scratch tree.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of one entry inside the tree.
    #[must_use]
    pub fn entry(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_creates_files_and_dirs() {
        let tree = FrameTree::with_dirs(&["a.0001.exr", "a.0002.exr"], &["renders"]);
        assert!(tree.entry("a.0001.exr").is_file());
        assert!(tree.entry("renders").is_dir());
    }

    #[test]
    fn tree_cleans_up_on_drop() {
        let path;
        {
            let tree = FrameTree::new(&["a.0001.exr"]);
            path = tree.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }
}
