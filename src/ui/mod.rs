//! Console presentation layer
//!
//! All per-file output goes through the [`Reporter`] trait so the rename
//! driver stays independent of how (or whether) progress is shown:
//! - [`ConsoleReporter`]: one line per renamed file (default)
//! - [`QuietReporter`]: only failures and the final summary (`--quiet`)

use console::Style;
use std::path::Path;

use crate::commands::rename::RenameSummary;
use crate::error::DespaceError;
use crate::planner::RenamePlan;

/// Receives events from the rename driver
pub trait Reporter {
    /// Called once before any entry is processed
    fn start(&mut self, dir: &Path);

    /// A file was renamed on disk
    fn renamed(&mut self, plan: &RenamePlan);

    /// A file would be renamed (dry run)
    fn would_rename(&mut self, plan: &RenamePlan);

    /// An entry failed and was skipped
    fn failed(&mut self, path: Option<&Path>, err: &DespaceError);

    /// Called once after the last entry
    fn finish(&mut self, summary: &RenameSummary);
}

/// Default reporter printing a line per file
#[derive(Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn start(&mut self, dir: &Path) {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Processing directory:"),
            dir.display()
        );
    }

    fn renamed(&mut self, plan: &RenamePlan) {
        println!(
            "{} Renamed: {} -> {}",
            Style::new().green().apply_to("✓"),
            plan.source_name(),
            plan.destination_name()
        );
    }

    fn would_rename(&mut self, plan: &RenamePlan) {
        println!(
            "{} {} -> {}",
            Style::new().yellow().apply_to("[DRY]"),
            plan.source.display(),
            plan.destination.display()
        );
    }

    fn failed(&mut self, path: Option<&Path>, err: &DespaceError) {
        print_failure(path, err);
    }

    fn finish(&mut self, summary: &RenameSummary) {
        print_summary(summary);
    }
}

/// Reporter for `--quiet`: failures and the summary only
#[derive(Default)]
pub struct QuietReporter;

impl Reporter for QuietReporter {
    fn start(&mut self, _dir: &Path) {}

    fn renamed(&mut self, _plan: &RenamePlan) {}

    fn would_rename(&mut self, _plan: &RenamePlan) {}

    fn failed(&mut self, path: Option<&Path>, err: &DespaceError) {
        print_failure(path, err);
    }

    fn finish(&mut self, summary: &RenameSummary) {
        print_summary(summary);
    }
}

fn print_failure(path: Option<&Path>, err: &DespaceError) {
    let marker = Style::new().for_stderr().red().apply_to("✗");
    match path {
        Some(path) => eprintln!("{marker} Skipping {}: {err}", path.display()),
        None => eprintln!("{marker} {err}"),
    }
}

fn print_summary(summary: &RenameSummary) {
    println!();
    println!("{}", format_summary(summary));
}

/// Final summary line, e.g. `✅ Done. 3 file(s) processed.`
pub fn format_summary(summary: &RenameSummary) -> String {
    let mut line = format!("✅ Done. {} file(s) processed.", summary.renamed);
    if summary.failed > 0 {
        line.push_str(&format!(" {} failed.", summary.failed));
    }
    if summary.dry_run {
        line.push_str(" (dry run)");
    }
    line
}
