//! CLI definitions using clap derive API
//!
//! Without a subcommand despace renames files; arguments live in:
//! - rename: directory, recursion, dry-run and quiet flags
//! - completions: completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod rename;

pub use completions::CompletionsArgs;
pub use rename::RenameArgs;

/// despace - replace spaces with underscores in image filenames
#[derive(Parser, Debug)]
#[command(
    name = "despace",
    author,
    version,
    args_conflicts_with_subcommands = true,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Replace spaces with underscores in image filenames",
    long_about = "despace renames image files (jpg, jpeg, png, gif, bmp, tif, tiff, webp, svg, heic) \
                  whose names contain spaces, replacing each space with an underscore. \
                  When the new name is taken, a numeric suffix is added (photo_1.png, photo_2.png, ...).",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  despace -d ~/Pictures               \x1b[90m# Rename images in a directory\x1b[0m\n   \
                  despace -d ~/Pictures -r            \x1b[90m# Include subdirectories\x1b[0m\n   \
                  despace -d ~/Pictures --dry-run     \x1b[90m# Preview without renaming\x1b[0m\n   \
                  despace completions zsh             \x1b[90m# Generate shell completions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub rename: RenameArgs,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}
