use clap::Args;
use std::path::PathBuf;

use crate::commands::rename::RenameOptions;

/// Arguments for the default rename action
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Directory to process
    #[arg(
        long,
        short = 'd',
        env = "DESPACE_DIR",
        default_value = ".",
        value_name = "PATH"
    )]
    pub dir: PathBuf,

    /// Search directories recursively
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Show what would be renamed without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Only print failures and the final summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl RenameArgs {
    pub fn options(&self) -> RenameOptions {
        RenameOptions {
            dir: self.dir.clone(),
            recursive: self.recursive,
            dry_run: self.dry_run,
        }
    }
}
