//! Command line errors

use super::DespaceError;

/// Creates an error for a shell clap_complete cannot target
pub fn unsupported_shell(shell: impl Into<String>) -> DespaceError {
    DespaceError::UnsupportedShell {
        shell: shell.into(),
    }
}
