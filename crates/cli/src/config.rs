//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use stockpile_infra::storage::DEFAULT_INVENTORY_FILE;

/// Terminal inventory tracker.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "stockpile", version, about)]
pub struct Cli {
    /// JSON file holding the inventory. Created on the first change.
    #[arg(short, long, env = "STOCKPILE_FILE", default_value = DEFAULT_INVENTORY_FILE)]
    pub file: PathBuf,

    /// Append JSON log lines to this file instead of logging warnings to stderr.
    #[arg(long, env = "STOCKPILE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags_are_used() {
        let cli = Cli::try_parse_from([
            "stockpile",
            "--file",
            "/tmp/shop.json",
            "--log-file",
            "/tmp/shop.log",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("/tmp/shop.json"));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/shop.log")));
    }

    #[test]
    fn short_file_flag() {
        let cli = Cli::try_parse_from(["stockpile", "-f", "stock.json"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("stock.json"));
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["stockpile", "--frobnicate"]).is_err());
    }
}
