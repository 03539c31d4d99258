//! Cycle log navigator CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use simutils::{CycleLog, NavSession};

/// Interactive cycle log navigator
///
/// Pages through a cycle-stamped simulator debug log. Type a cycle number
/// and press Enter to jump to it; step with the left/right arrow keys;
/// quit with `q` or ctrl-C.
#[derive(Parser, Debug)]
#[command(name = "navigator", version, about)]
struct Cli {
    /// Path to the cycle-stamped debug log file
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log = CycleLog::open(&cli.log_file)
        .with_context(|| format!("Cannot view '{}'", cli.log_file.display()))?;

    let mut session = NavSession::new(log);
    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_takes_log_file_as_positional_arg() {
        let cli = Cli::parse_from(["navigator", "debug.log"]);
        assert_eq!(cli.log_file, PathBuf::from("debug.log"));
    }

    #[test]
    fn test_cli_requires_log_file() {
        let result = Cli::try_parse_from(["navigator"]);
        assert!(result.is_err());
    }
}
