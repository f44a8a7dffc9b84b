//! CLI arguments structure
//!
//! Global flags cover configuration discovery and logging; the actual work
//! lives in the subcommands.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "versionwatch")]
#[command(about = "Version manifest stamping and update polling")]
#[command(version = crate::core::version::long_version())]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub log_format: Option<String>,

    /// Force colored output (default: auto-detect terminal)
    #[arg(long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write the version manifest into the build output directory
    Stamp {
        /// Build output directory (default: dist)
        #[arg(short = 'd', long = "out-dir", value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Manifest file name (default: version.json)
        #[arg(short = 'n', long = "file-name", value_name = "NAME")]
        file_name: Option<String>,

        /// Version strategy (default: timestamp)
        #[arg(short = 's', long = "strategy", value_name = "STRATEGY", value_parser = ["git", "timestamp"])]
        strategy: Option<String>,
    },

    /// Poll a version manifest URL and report when a new version appears
    Watch {
        /// URL serving the version manifest
        #[arg(short = 'u', long = "url", value_name = "URL")]
        url: Option<String>,

        /// Poll interval in seconds, at least 1 (default: 60)
        #[arg(short = 'i', long = "interval", value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },
}

impl Args {
    /// Color decision: explicit flags win, otherwise follow the terminal.
    pub fn use_color(&self) -> bool {
        use std::io::IsTerminal;
        (self.color || std::io::stderr().is_terminal()) && !self.no_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_rejects_zero_interval() {
        let result = Args::try_parse_from([
            "versionwatch",
            "watch",
            "--url",
            "https://example.com/version.json",
            "--interval",
            "0",
        ]);
        assert!(result.is_err(), "interval 0 must not parse");
    }

    #[test]
    fn test_watch_accepts_positive_interval() {
        let args = Args::try_parse_from([
            "versionwatch",
            "watch",
            "--url",
            "https://example.com/version.json",
            "--interval",
            "30",
        ])
        .unwrap();
        match args.command {
            Command::Watch { interval, .. } => assert_eq!(interval, Some(30)),
            other => panic!("expected watch command, got {other:?}"),
        }
    }
}
