//! despace - replace spaces with underscores in image filenames
//!
//! Scans a directory (optionally recursively) for image files whose names
//! contain spaces and renames them, adding a numeric suffix when the new
//! name is already taken.

use clap::Parser;

mod classify;
mod cli;
mod commands;
mod error;
mod logging;
mod planner;
mod scan;
mod ui;

use cli::{Cli, Commands};
use error::Result;
use ui::{ConsoleReporter, QuietReporter, Reporter};

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Completions(args)) => commands::completions::run(args),
        None => {
            let mut reporter: Box<dyn Reporter> = if cli.rename.quiet {
                Box::new(QuietReporter)
            } else {
                Box::new(ConsoleReporter)
            };
            commands::rename::run(&cli.rename.options(), reporter.as_mut()).map(|_| ())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
