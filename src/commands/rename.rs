//! Rename command implementation
//!
//! Walks the target directory, keeps image files whose names contain
//! spaces, plans a collision-free destination for each and either renames
//! it or reports the plan (dry run). A failure on one entry is reported and
//! the run moves on; only a missing or non-directory target aborts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::classify;
use crate::error::{self, Result};
use crate::planner::{Planner, RenamePlan};
use crate::scan;
use crate::ui::Reporter;

/// Options for a rename run, resolved from the command line
#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub dir: PathBuf,
    pub recursive: bool,
    pub dry_run: bool,
}

/// Counts for a finished run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenameSummary {
    /// Files renamed, or that would be renamed in a dry run
    pub renamed: usize,
    /// Entries that are not images or have no space in their name
    pub skipped: usize,
    /// Entries that failed to scan, plan or rename
    pub failed: usize,
    pub dry_run: bool,
}

/// Run the rename command
pub fn run(options: &RenameOptions, reporter: &mut dyn Reporter) -> Result<RenameSummary> {
    check_directory(&options.dir)?;
    reporter.start(&options.dir);

    let scan = scan::collect_entries(&options.dir, options.recursive);
    let mut summary = RenameSummary {
        dry_run: options.dry_run,
        ..RenameSummary::default()
    };

    for err in &scan.errors {
        tracing::warn!("{err}");
        reporter.failed(None, err);
        summary.failed += 1;
    }

    let mut planner = Planner::new();
    for path in &scan.entries {
        if !classify::is_image_file(path) || !classify::needs_rename(path) {
            tracing::debug!("skipping {}", path.display());
            summary.skipped += 1;
            continue;
        }

        match process_entry(path, &mut planner, options.dry_run) {
            Ok(plan) => {
                if options.dry_run {
                    reporter.would_rename(&plan);
                } else {
                    reporter.renamed(&plan);
                }
                summary.renamed += 1;
            }
            Err(err) => {
                tracing::warn!("skipping {}: {err}", path.display());
                reporter.failed(Some(path), &err);
                summary.failed += 1;
            }
        }
    }

    tracing::debug!(
        renamed = summary.renamed,
        skipped = summary.skipped,
        failed = summary.failed,
        "run finished"
    );
    reporter.finish(&summary);
    Ok(summary)
}

/// Refuse to start unless `dir` exists and is a directory
fn check_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(error::directory_not_found(dir));
    }
    if !dir.is_dir() {
        return Err(error::not_a_directory(dir));
    }
    Ok(())
}

fn process_entry(path: &Path, planner: &mut Planner, dry_run: bool) -> Result<RenamePlan> {
    let plan = planner.plan(path)?;
    tracing::debug!(
        "planned {} -> {}",
        plan.source.display(),
        plan.destination.display()
    );

    if !dry_run {
        fs::rename(&plan.source, &plan.destination)
            .map_err(|e| error::rename_failed(&plan.source, &plan.destination, e.to_string()))?;
    }

    planner.reserve(plan.destination.clone());
    Ok(plan)
}
