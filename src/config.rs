// src/config.rs
// =============================================================================
// This module turns raw command-line arguments into a validated RunConfig.
//
// Everything that can make a run impossible is checked here, before a single
// request goes out:
// - concurrency must be a positive integer
// - the timeout must be longer than zero
// - (the input file is checked when it's read, see list.rs)
//
// Rust concepts:
// - thiserror: derive Display/Error for our own error enum
// - NonZeroUsize: once built, a RunConfig can't hold a zero concurrency
// =============================================================================

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::cli::Cli;

pub const DEFAULT_CONCURRENCY: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Problems that stop a run before any URL is probed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("concurrency limit must be a positive integer, got {0}")]
    InvalidConcurrency(i64),

    #[error("request timeout must be greater than zero")]
    InvalidTimeout,

    #[error("cannot read input file '{}': {source}", .path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Output format for the list of passing URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One URL per line
    Lines,
    /// A JSON array of strings
    Json,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    /// None means standard output
    pub output: Option<PathBuf>,
    pub concurrency: NonZeroUsize,
    pub timeout: Duration,
    pub format: OutputFormat,
}

impl RunConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        Ok(Self {
            concurrency: validate_concurrency(cli.max_workers)?,
            timeout: validate_timeout(cli.timeout)?,
            input: cli.input_file,
            output: cli.output,
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Lines
            },
        })
    }
}

// The CLI accepts negative numbers on purpose, so that "--max-workers -1"
// reaches us and gets a proper configuration error instead of a parse error.
fn validate_concurrency(raw: i64) -> Result<NonZeroUsize, ConfigError> {
    usize::try_from(raw)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(ConfigError::InvalidConcurrency(raw))
}

fn validate_timeout(secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout);
    }
    Ok(Duration::from_secs(secs))
}
