//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so the report on stdout stays clean.
//! Filter priority: `DOCFIND_CHECK_LOG`, then `RUST_LOG`, then the CLI
//! verbosity flags (`-q` errors only, default warnings, `-v` debug).

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DOCFIND_CHECK_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Verbose wins when both flags are given.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }

    pub fn default_level(self) -> Level {
        match self {
            Verbosity::Quiet => Level::ERROR,
            Verbosity::Normal => Level::WARN,
            Verbosity::Verbose => Level::DEBUG,
        }
    }
}

/// Installs the global subscriber. Call once, early in `main`.
///
/// `color` is the same decision the report uses (`--no-color`, `NO_COLOR`).
pub fn init_subscriber(verbosity: Verbosity, color: bool) {
    let use_ansi = ansi_enabled(color, std::io::IsTerminal::is_terminal(&std::io::stderr()));
    tracing_subscriber::registry()
        .with(build_env_filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_ansi)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

fn ansi_enabled(color: bool, stderr_is_terminal: bool) -> bool {
    color && stderr_is_terminal
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    for var in [LOG_ENV, "RUST_LOG"] {
        if let Ok(directives) = std::env::var(var) {
            if let Ok(filter) = EnvFilter::try_new(&directives) {
                return filter;
            }
        }
    }
    EnvFilter::new(verbosity.default_level().to_string().to_lowercase())
}
