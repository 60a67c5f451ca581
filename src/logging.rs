//! Diagnostic logging
//!
//! User-facing output goes through [`crate::ui`]; this is for `--verbose`
//! detail on stderr. `RUST_LOG` wins over the flag when set.

use tracing_subscriber::EnvFilter;

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "despace=debug" } else { "despace=warn" }
}

pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // try_init so a second call (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
