//! CLI argument parsing for the restructurer.
//!
//! CLI flags override all other config sources.

use std::path::PathBuf;

use clap::Parser;

/// JSON vector restructurer
///
/// Detects long numeric arrays (embedding vectors) in a JSON file, moves them
/// into a separate vector store and leaves `<key>_id` references behind.
#[derive(Parser, Debug)]
#[command(name = "json-restructure")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  json-restructure input.json output.json
  json-restructure large_data.json restructured.json --threshold 500
  json-restructure --restore restructured.json original.json")]
pub struct Cli {
    /// Input JSON file
    pub input_file: PathBuf,

    /// Output JSON file
    pub output_file: PathBuf,

    /// Minimum array length treated as a vector (default: 2)
    #[arg(short, long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Fail instead of overwriting when `<key>_id` already exists next to a vector
    #[arg(long)]
    pub strict_keys: bool,

    /// Rebuild the original document from a restructured one
    #[arg(long, conflicts_with_all = ["threshold", "strict_keys"])]
    pub restore: bool,

    /// Path to config file (overrides default ~/.config/json-restructure/config.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_positional_files() {
        let cli = Cli::parse_from(["json-restructure", "in.json", "out.json"]);
        assert_eq!(cli.input_file, PathBuf::from("in.json"));
        assert_eq!(cli.output_file, PathBuf::from("out.json"));
        assert_eq!(cli.threshold, None);
        assert!(!cli.restore);
        assert!(!cli.strict_keys);
    }

    #[test]
    fn test_cli_threshold_short_and_long() {
        let cli = Cli::parse_from(["json-restructure", "a", "b", "-t", "384"]);
        assert_eq!(cli.threshold, Some(384));

        let cli = Cli::parse_from(["json-restructure", "a", "b", "--threshold", "1536"]);
        assert_eq!(cli.threshold, Some(1536));
    }

    #[test]
    fn test_cli_negative_threshold_parses() {
        let cli = Cli::parse_from(["json-restructure", "a", "b", "-t", "-1"]);
        assert_eq!(cli.threshold, Some(-1));
    }

    #[test]
    fn test_cli_non_integer_threshold_rejected() {
        assert!(Cli::try_parse_from(["json-restructure", "a", "b", "-t", "two"]).is_err());
    }

    #[test]
    fn test_cli_missing_output_rejected() {
        assert!(Cli::try_parse_from(["json-restructure", "a"]).is_err());
    }

    #[test]
    fn test_cli_restore_conflicts_with_threshold() {
        assert!(Cli::try_parse_from(["json-restructure", "a", "b", "--restore", "-t", "3"]).is_err());
        let cli = Cli::parse_from(["json-restructure", "--restore", "a", "b"]);
        assert!(cli.restore);
    }

    #[test]
    fn test_cli_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "json-restructure",
            "--config",
            "/path/to/config.toml",
            "-l",
            "debug",
            "a",
            "b",
        ]);
        assert_eq!(cli.config, Some("/path/to/config.toml".to_string()));
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
