//! Failure categories reported to the user.

use std::path::PathBuf;

use thiserror::Error;

use restructure_types::RestructureError;

/// Errors surfaced by the command-line tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("Input file not found -> '{}'", .0.display())]
    InputNotFound(PathBuf),

    /// Input file is not well-formed JSON
    #[error("Input file is not valid JSON -> '{}': {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration or restructuring failure
    #[error(transparent)]
    Restructure(#[from] RestructureError),

    /// Anything else (I/O, logging setup)
    #[error("Unexpected error: {0:#}")]
    Other(#[from] anyhow::Error),
}
