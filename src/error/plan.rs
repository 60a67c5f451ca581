//! Rename planning errors

use std::path::Path;

use super::DespaceError;

/// Creates an error for a collision search that ran out of attempts
pub fn namespace_exhausted(candidate: impl AsRef<Path>, attempts: usize) -> DespaceError {
    DespaceError::NamespaceExhausted {
        candidate: candidate.as_ref().display().to_string(),
        attempts,
    }
}

/// Creates an error for a path without a usable file name
pub fn invalid_file_name(path: impl AsRef<Path>) -> DespaceError {
    DespaceError::InvalidFileName {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates an error for an existence check that failed for a reason other
/// than the path being absent
pub fn lookup_failed(path: impl AsRef<Path>, reason: impl Into<String>) -> DespaceError {
    DespaceError::LookupFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.into(),
    }
}
