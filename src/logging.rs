//! Logging setup for the command-line binary.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive for a verbosity level.
///
/// `quiet` wins over `verbose`; 0 = info, 1 = debug, 2+ = trace.
pub fn level_directive(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flags when set.
pub fn init_logging(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, quiet)));

    fmt()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
