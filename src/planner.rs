//! Rename planning
//!
//! Turns a file whose name contains spaces into a [`RenamePlan`] whose
//! destination has every space replaced with an underscore. If that name is
//! taken, a numeric disambiguator is inserted before the extension:
//! `beach photo.png` next to an existing `beach_photo.png` plans
//! `beach_photo_1.png`, then `_2`, and so on.
//!
//! Existence is checked live and the check is not atomic with the rename
//! the caller performs later. Another process creating the same name in
//! between can still make the rename collide.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Upper bound on disambiguator attempts before giving up
pub const MAX_ATTEMPTS: usize = 10_000;

/// A source file and the destination it should be renamed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl RenamePlan {
    pub fn source_name(&self) -> String {
        file_name_lossy(&self.source)
    }

    pub fn destination_name(&self) -> String {
        file_name_lossy(&self.destination)
    }
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Replace every space in a file name with an underscore
pub fn candidate_name(file_name: &str) -> String {
    file_name.replace(' ', "_")
}

/// Computes collision-free destinations.
///
/// Destinations handed out earlier in the same run can be reserved so that
/// a dry run, which never creates them on disk, still plans the suffixes a
/// real run would.
#[derive(Debug)]
pub struct Planner {
    reserved: HashSet<PathBuf>,
    max_attempts: usize,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

impl Planner {
    pub fn new() -> Self {
        Self::with_max_attempts(MAX_ATTEMPTS)
    }

    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            reserved: HashSet::new(),
            max_attempts,
        }
    }

    /// Mark `path` as taken for the rest of the run
    pub fn reserve(&mut self, path: impl Into<PathBuf>) {
        self.reserved.insert(path.into());
    }

    /// Plan the rename of `source`, whose file name contains a space.
    ///
    /// Fails with `InvalidFileName` when the name is missing or not valid
    /// UTF-8, with `LookupFailed` when a candidate cannot be checked (for
    /// example a name too long for the filesystem), and with
    /// `NamespaceExhausted` when no free name turns up within the attempt
    /// bound.
    pub fn plan(&self, source: &Path) -> Result<RenamePlan> {
        let file_name = source
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| error::invalid_file_name(source))?;

        let candidate = source.with_file_name(candidate_name(file_name));
        let destination = self.resolve_collision(&candidate)?;

        Ok(RenamePlan {
            source: source.to_path_buf(),
            destination,
        })
    }

    fn resolve_collision(&self, candidate: &Path) -> Result<PathBuf> {
        if self.is_free(candidate)? {
            return Ok(candidate.to_path_buf());
        }

        // stem and extension come from the underscored name
        let stem = candidate
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| error::invalid_file_name(candidate))?;
        let extension = candidate
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();

        for n in 1..=self.max_attempts {
            let next = candidate.with_file_name(format!("{stem}_{n}{extension}"));
            if self.is_free(&next)? {
                return Ok(next);
            }
        }

        Err(error::namespace_exhausted(candidate, self.max_attempts))
    }

    /// Only `NotFound` means free; any other lookup failure is returned.
    fn is_free(&self, path: &Path) -> Result<bool> {
        if self.reserved.contains(path) {
            return Ok(false);
        }
        // symlink_metadata so a dangling symlink still counts as taken
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(false),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(error::lookup_failed(path, e.to_string())),
        }
    }
}
