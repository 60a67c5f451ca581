//! Error types and handling for despace
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`cli`]: command line usage
//! - [`fs`]: directory checks, scanning and renaming
//! - [`plan`]: rename planning

pub mod cli;
pub mod fs;
pub mod plan;

pub use cli::unsupported_shell;
pub use fs::{directory_not_found, io_error, not_a_directory, rename_failed, scan_failed};
pub use plan::{invalid_file_name, lookup_failed, namespace_exhausted};

use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

/// Main error type for despace operations
#[derive(Error, Diagnostic, Debug)]
pub enum DespaceError {
    // Pre-flight errors
    #[error("Directory not found: {path}")]
    #[diagnostic(
        code(despace::fs::directory_not_found),
        help("Pass an existing directory with --dir or set DESPACE_DIR")
    )]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    #[diagnostic(
        code(despace::fs::not_a_directory),
        help("--dir must point at a directory, not a file")
    )]
    NotADirectory { path: String },

    // Per-entry errors
    #[error("Failed to scan {path}: {reason}")]
    #[diagnostic(code(despace::fs::scan_failed))]
    ScanFailed { path: String, reason: String },

    #[error("Failed to rename {from} -> {to}: {reason}")]
    #[diagnostic(code(despace::fs::rename_failed))]
    RenameFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(despace::fs::io_error))]
    IoError { message: String },

    // Planning errors
    #[error("Namespace exhausted for '{candidate}' after {attempts} attempts")]
    #[diagnostic(
        code(despace::plan::namespace_exhausted),
        help("Too many files share this name; rename some of them by hand")
    )]
    NamespaceExhausted { candidate: String, attempts: usize },

    #[error("Invalid file name: {path}")]
    #[diagnostic(code(despace::plan::invalid_file_name))]
    InvalidFileName { path: String },

    #[error("Cannot check whether {path} exists: {reason}")]
    #[diagnostic(code(despace::plan::lookup_failed))]
    LookupFailed { path: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(despace::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },
}

impl From<std::io::Error> for DespaceError {
    fn from(err: std::io::Error) -> Self {
        io_error(err.to_string())
    }
}

impl From<walkdir::Error> for DespaceError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or_else(|| Path::new("unknown"));
        scan_failed(path, err.to_string())
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DespaceError>;
