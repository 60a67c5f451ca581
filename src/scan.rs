//! Directory enumeration
//!
//! Collects candidate entries up front so renames performed later never
//! disturb the walk. Entries come back sorted by file name within each
//! directory, depth-first. Directory symlinks are not followed.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::DespaceError;

/// Entries found under a directory, plus the ones that could not be read
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub entries: Vec<PathBuf>,
    pub errors: Vec<DespaceError>,
}

/// List the non-directory entries of `dir`, descending into
/// subdirectories only when `recursive` is set.
pub fn collect_entries(dir: &Path, recursive: bool) -> ScanOutcome {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => {}
            Ok(entry) => outcome.entries.push(entry.into_path()),
            Err(err) => {
                tracing::debug!("scan error: {err}");
                outcome.errors.push(err.into());
            }
        }
    }

    outcome
}
