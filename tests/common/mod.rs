//! Common test utilities for despace integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory of files to rename
pub struct TestDir {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the directory root
    pub path: PathBuf,
}

impl TestDir {
    /// Create a new empty test directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a file holding its own relative path, creating parent directories as needed
    #[allow(dead_code)]
    pub fn touch(&self, path: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, path).expect("Failed to write file");
    }

    /// Read a file back
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the directory
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Sorted names of the entries directly under `dir`
    #[allow(dead_code)]
    pub fn list(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(dir))
            .expect("Failed to read directory")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// despace command with a clean environment
#[allow(deprecated)]
pub fn despace_cmd() -> Command {
    let mut cmd = Command::cargo_bin("despace").expect("Failed to find despace binary");
    // Ignore any developer DESPACE_DIR / RUST_LOG overrides during tests
    cmd.env_remove("DESPACE_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// despace command pointed at `dir` with `--dir`
#[allow(dead_code)]
pub fn despace_cmd_for_dir(dir: &Path) -> Command {
    let mut cmd = despace_cmd();
    cmd.arg("--dir").arg(dir);
    cmd
}
