//! Shared helpers for unit tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an empty temporary site directory.
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes `content` to `relative` under `dir`, creating parent directories.
pub fn create_test_file(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

pub fn read_to_string(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read file")
}
