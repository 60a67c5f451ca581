//! File system errors

use std::path::Path;

use super::DespaceError;

/// Creates a directory not found error
pub fn directory_not_found(path: impl AsRef<Path>) -> DespaceError {
    DespaceError::DirectoryNotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates a not-a-directory error
pub fn not_a_directory(path: impl AsRef<Path>) -> DespaceError {
    DespaceError::NotADirectory {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates a scan error for a directory entry
pub fn scan_failed(path: impl AsRef<Path>, reason: impl Into<String>) -> DespaceError {
    DespaceError::ScanFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a rename error
pub fn rename_failed(
    from: impl AsRef<Path>,
    to: impl AsRef<Path>,
    reason: impl Into<String>,
) -> DespaceError {
    DespaceError::RenameFailed {
        from: from.as_ref().display().to_string(),
        to: to.as_ref().display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> DespaceError {
    DespaceError::IoError {
        message: message.into(),
    }
}
