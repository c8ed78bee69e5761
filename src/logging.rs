//! Logging setup
//!
//! Command-line modes log to stderr so stdout stays clean for results and
//! exports. The TUI owns the terminal, so while it runs logs go to a file.
//!
//! `RUST_LOG` overrides the configured level in both cases.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{FatLossError, FatLossResult};

fn make_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr. Call once at startup.
pub fn init_stderr_logging(default_level: &str) {
    let _ = fmt()
        .with_env_filter(make_filter(default_level))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Log to `path`, appending. The parent directory must already exist.
pub fn init_file_logging(path: &Path, default_level: &str) -> FatLossResult<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            FatLossError::Io(format!("cannot open log file '{}': {}", path.display(), e))
        })?;

    let _ = fmt()
        .with_env_filter(make_filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
