//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink at `link` pointing at `target`.
    ///
    /// `target` is stored as given, so relative targets resolve against the
    /// link's own directory.
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        std::os::unix::fs::symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }

    /// Build a balanced tree `breadth` wide and `depth` levels deep with
    /// `files_per_dir` files in every directory.
    pub fn populate(&self, breadth: usize, depth: usize, files_per_dir: usize) {
        fill(self.dir.path(), breadth, depth, files_per_dir);
    }
}

fn fill(dir: &Path, breadth: usize, depth: usize, files_per_dir: usize) {
    for f in 0..files_per_dir {
        fs::write(dir.join(format!("file{}.txt", f)), "").expect("Failed to write file");
    }
    if depth == 0 {
        return;
    }
    for b in 0..breadth {
        let child = dir.join(format!("dir{}", b));
        fs::create_dir(&child).expect("Failed to create dir");
        fill(&child, breadth, depth - 1, files_per_dir);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
