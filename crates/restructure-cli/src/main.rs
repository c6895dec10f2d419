//! JSON vector restructurer.
//!
//! Extracts embedding-like numeric arrays from a JSON file into a separate
//! vector store and writes `{"data": ..., "vectors": ...}`.
//!
//! # Usage
//!
//! ```bash
//! json-restructure input.json output.json [--threshold N] [--strict-keys]
//! json-restructure --restore restructured.json original.json
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/json-restructure/config.toml)
//! 3. Environment variables (RESTRUCTURE_*)
//! 4. CLI flags

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use restructure_cli::{run, Cli};

fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, on stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
