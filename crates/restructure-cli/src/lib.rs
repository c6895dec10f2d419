//! JSON restructurer CLI library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Restructure / restore implementations and file I/O
//! - `error`: User-facing failure categories

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::Cli;
pub use commands::{
    init_logging, read_json, resolve_settings, restore_file, restructure_file, run, write_json,
    RunSummary,
};
pub use error::CliError;
