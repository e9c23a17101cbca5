//! Logger setup for the command-line tool

use env_logger::{Builder, Env};
use log::LevelFilter;

/// How much diagnostic output to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Informational messages and warnings
    Normal,
    /// Per-thumbnail and per-run debugging detail
    Verbose,
}

impl Verbosity {
    /// Pick the verbosity from the `--quiet` and `--verbose` flags
    ///
    /// `quiet` wins when both are set.
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Default level filter for this verbosity
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Error,
            Self::Normal => LevelFilter::Info,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// Install the global logger
///
/// `RUST_LOG` overrides the level chosen by `verbosity`. Calling this more
/// than once keeps the first logger.
pub fn init(verbosity: Verbosity) {
    let env = Env::default().default_filter_or(verbosity.level_filter().as_str());
    // A logger installed earlier (e.g. by a test harness) stays in place
    let _ = Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
