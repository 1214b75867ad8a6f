//! Diagnostics go to stderr so stdout carries only command output.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
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

    /// Quiet silences the crate's own events; failures still reach the user
    /// through the returned error.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::OFF,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }

    fn directive(self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.level_filter())
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the flags.
pub fn init(verbosity: Verbosity) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    let detailed = verbosity >= Verbosity::Debug;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(detailed)
        .with_file(detailed)
        .with_line_number(detailed)
        .compact();

    let installed = if detailed {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };
    installed.map_err(|e| anyhow::anyhow!(e))
}
