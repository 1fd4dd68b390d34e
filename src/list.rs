// src/list.rs
// =============================================================================
// Reading the input URL list and writing the filtered list back out.
//
// Input: one URL per line, whitespace trimmed, blank lines dropped. No
// comments, no URL validation (bad URLs fail later, in the prober).
// Output: one URL per line, or a pretty JSON array with --json.
// =============================================================================

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{ConfigError, OutputFormat};

/// Splits text into URLs: one per line, trimmed, blanks dropped.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Order and duplicates are
/// kept exactly as they appear.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_url_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_url_list(&text))
}

pub fn write_url_list<W: Write>(mut sink: W, urls: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Lines => {
            for url in urls {
                writeln!(sink, "{}", url)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut sink, urls)?;
            writeln!(sink)?;
        }
    }
    sink.flush()?;
    Ok(())
}

// Writes to the file if one was given, otherwise to stdout.
pub fn write_results(output: Option<&Path>, urls: &[String], format: OutputFormat) -> Result<()> {
    match output {
        Some(path) => {
            tracing::info!(path = %path.display(), "writing results");
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create output file '{}'", path.display()))?;
            write_url_list(std::io::BufWriter::new(file), urls, format)
                .with_context(|| format!("cannot write output file '{}'", path.display()))
        }
        None => write_url_list(std::io::stdout().lock(), urls, format)
            .context("cannot write results to stdout"),
    }
}
