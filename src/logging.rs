//! Structured logging setup for embedders of this crate.
//!
//! The core never initializes a global subscriber on its own — extraction
//! calls run the same whether or not `init` was ever called. Callers
//! (tests, an embedding CLI) opt in explicitly.

use tracing_subscriber::EnvFilter;

/// Logging verbosity, ordered least to most noisy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    pub fn to_level(self) -> tracing::Level {
        match self {
            Self::Quiet => tracing::Level::ERROR,
            Self::Normal => tracing::Level::WARN,
            Self::Verbose => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    fn to_filter(self) -> String {
        format!("ananke_extraction_core={}", self.to_level())
    }
}

impl PartialOrd for Verbosity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Verbosity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        fn rank(v: &Verbosity) -> u8 {
            match v {
                Verbosity::Quiet => 0,
                Verbosity::Normal => 1,
                Verbosity::Verbose => 2,
                Verbosity::Debug => 3,
                Verbosity::Trace => 4,
            }
        }
        rank(self).cmp(&rank(other))
    }
}

/// Initialize the global `tracing` subscriber at the given verbosity.
///
/// Safe to call more than once; subsequent calls are no-ops if a
/// subscriber is already installed.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .with_target(false);

    let result = if verbosity == Verbosity::Quiet {
        builder.with_writer(std::io::sink).try_init()
    } else if verbosity == Verbosity::Normal {
        builder.without_time().try_init()
    } else {
        builder.try_init()
    };

    let _ = result;
}
