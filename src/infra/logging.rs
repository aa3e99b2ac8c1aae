//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so rendered output on stdout stays clean.
//!
//! - default: warnings (failed preference writes) and errors
//! - `-v`: preference reads and writes
//! - `-vv`: locale resolution and presentation sync details
//! - `-vvv`: frame-level layout tracing
//!
//! `RUST_LOG` overrides all of the above.

use std::io;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps `-v` count and `-q` to a level.
pub fn level_for(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Other crates stay at warn to reduce noise
        EnvFilter::new(format!(
            "warn,lifecycle_diagram={level}",
            level = level.as_str().to_lowercase()
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
