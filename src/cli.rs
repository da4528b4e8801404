//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe - play against a computer that picks random squares
#[derive(Parser, Debug, Clone)]
#[command(name = "tictac")]
#[command(about = "Tic Tac Toe against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Seed for the computer's moves, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictac"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("tictac.toml"));
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "tictac",
            "-c",
            "custom.toml",
            "--seed",
            "42",
            "--log-file",
            "game.log",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["tictac", "--seed", "abc"]).is_err());
    }
}
