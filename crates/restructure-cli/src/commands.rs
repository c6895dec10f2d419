//! Command implementations for the restructurer.
//!
//! Handles:
//! - restructure: read JSON, extract vectors, write `{data, vectors}`
//! - restore: read `{data, vectors}`, write the original document
//!
//! Progress lines go to stdout. Diagnostics go through tracing to stderr.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use restructure_core::{restore, Restructurer, RestructuringResult};
use restructure_types::Settings;

use crate::cli::Cli;
use crate::error::CliError;

/// Counts reported after a restructure run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub vectors: usize,
    pub elements: usize,
}

/// Load settings and apply CLI overrides (highest precedence).
///
/// The threshold is not validated here; only restructuring uses it, and
/// `Restructurer::from_settings` checks it.
pub fn resolve_settings(cli: &Cli) -> Result<Settings, CliError> {
    let mut settings = Settings::load(cli.config.as_deref())?;

    if let Some(threshold) = cli.threshold {
        settings.threshold = threshold;
    }
    if cli.strict_keys {
        settings.strict_keys = true;
    }
    if let Some(log_level) = &cli.log_level {
        settings.log_level = log_level.clone();
    }

    Ok(settings)
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `log_level`.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Entry point behind `main`.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = resolve_settings(cli)?;
    init_logging(&settings.log_level)?;
    debug!(?settings, "Resolved configuration");

    if cli.restore {
        restore_file(&cli.input_file, &cli.output_file)
    } else {
        let restructurer = Restructurer::from_settings(&settings)?;
        restructure_file(&cli.input_file, &cli.output_file, &restructurer).map(|_| ())
    }
}

/// Read and parse a whole UTF-8 JSON file.
pub fn read_json(path: &Path) -> Result<Value, CliError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CliError::InputNotFound(path.to_path_buf()))
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to read {}", path.display()))
                .into())
        }
    };

    serde_json::from_str(&text).map_err(|source| CliError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty JSON (2-space indent, non-ASCII kept literal).
pub fn write_json(path: &Path, value: &Value) -> Result<(), CliError> {
    let mut text = serde_json::to_string_pretty(value)
        .context("Failed to serialize output")?;
    text.push('\n');
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Restructure `input` into `output`.
pub fn restructure_file(
    input: &Path,
    output: &Path,
    restructurer: &Restructurer,
) -> Result<RunSummary, CliError> {
    println!("Reading file: {}", input.display());
    let document = read_json(input)?;

    println!(
        "Restructuring with threshold {}...",
        restructurer.threshold()
    );
    let result = restructurer.restructure(document)?;
    let summary = RunSummary {
        vectors: result.vector_count(),
        elements: result.total_elements(),
    };

    if summary.vectors > 0 {
        println!(
            "Success! Detected and extracted {} vectors.",
            summary.vectors
        );
    } else {
        println!("Warning: no vectors matching the threshold were found. The document will be wrapped unchanged.");
    }
    info!(
        vectors = summary.vectors,
        elements = summary.elements,
        "Extraction complete"
    );

    println!("Writing result to file: {}", output.display());
    write_json(output, &result.into_value())?;

    println!("Done.");
    Ok(summary)
}

/// Restore a restructured `input` into the original document at `output`.
pub fn restore_file(input: &Path, output: &Path) -> Result<(), CliError> {
    println!("Reading file: {}", input.display());
    let envelope = read_json(input)?;
    let result = RestructuringResult::from_value(envelope)?;

    println!("Restoring {} vectors...", result.vector_count());
    let document = restore(result)?;

    println!("Writing result to file: {}", output.display());
    write_json(output, &document)?;

    println!("Done.");
    Ok(())
}
