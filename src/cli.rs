// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The values here are raw: config.rs validates them into a RunConfig.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "url-filter",
    version = "0.1.0",
    about = "Filter a list of URLs down to the ones that answer HTTP 200",
    long_about = "url-filter reads one URL per line, requests each of them once with a bounded \
                  number of requests in flight, and prints the URLs that returned status 200. \
                  Diagnostics go to stderr, so stdout can be piped straight into another tool."
)]
pub struct Cli {
    /// File containing the list of URLs, one per line
    ///
    /// Blank lines are ignored and surrounding whitespace is trimmed.
    pub input_file: PathBuf,

    /// File to save URLs with status 200 (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of requests allowed in flight at the same time
    ///
    /// Must be a positive integer. Negative values are accepted by the parser
    /// so they can be reported as a configuration error.
    #[arg(
        long = "max-workers",
        visible_alias = "max_workers",
        default_value_t = DEFAULT_CONCURRENCY as i64,
        allow_negative_numbers = true
    )]
    pub max_workers: i64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Output the passing URLs as a JSON array instead of one per line
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why PathBuf instead of String for files?
//    - PathBuf is the owned path type, it handles OS-specific path rules
//    - Option<PathBuf> = "maybe a path"; None means we print to stdout
//
// 2. Why i64 for max_workers?
//    - usize can't be negative, so clap would reject "-3" with a parse error
//    - We want "-3" to produce the same kind of error as "0"
// -----------------------------------------------------------------------------
