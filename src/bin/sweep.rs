//! Frequency sweep driver CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use simutils::sweep::command::render_command;
use simutils::sweep::range::{DEFAULT_START, DEFAULT_STEP, DEFAULT_STOP};
use simutils::sweep::{DEFAULT_SIMULATOR, DEFAULT_WORKDIR_PREFIX};
use simutils::{
    ClockRange, JsonlLogger, PointOutcome, PointResult, SweepConfig, SweepDisplay, SweepRunner,
    SweepSummary,
};

/// Frequency sweep driver
///
/// Invokes the simulator once per clock value in [start, stop) with the
/// given step, forwarding all trailing arguments verbatim. Each invocation
/// gets its own working directory so outputs never collide. A failed point
/// never aborts the remaining points.
#[derive(Parser, Debug)]
#[command(name = "sweep", version, about)]
struct Cli {
    /// Simulator binary to invoke
    #[arg(long, default_value = DEFAULT_SIMULATOR)]
    simulator: String,

    /// First clock value (inclusive)
    #[arg(long, default_value_t = DEFAULT_START)]
    start: u64,

    /// End of the clock range (exclusive)
    #[arg(long, default_value_t = DEFAULT_STOP)]
    stop: u64,

    /// Distance between consecutive clock values
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: u64,

    /// Prefix for per-point working directory names
    #[arg(long, default_value = DEFAULT_WORKDIR_PREFIX)]
    workdir_prefix: String,

    /// Directory for the JSONL run log (.sweep by default)
    #[arg(long, default_value = ".sweep")]
    log_dir: PathBuf,

    /// Exit non-zero if any sweep point failed
    #[arg(long)]
    strict: bool,

    /// Arguments forwarded verbatim to every simulator invocation
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Build a `PointOutcome` from a `PointResult` for JSONL logging.
fn build_outcome(result: &PointResult) -> PointOutcome {
    PointOutcome {
        clk: result.clk,
        workdir: result.workdir.clone(),
        timestamp: Utc::now(),
        success: result.success,
        exit_code: result.exit_code,
        duration_secs: result.duration_secs,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let range = ClockRange::new(cli.start, cli.stop, cli.step).context("Invalid sweep range")?;

    let config = SweepConfig {
        simulator: cli.simulator.clone(),
        args: cli.args.clone(),
        range,
        workdir_prefix: cli.workdir_prefix.clone(),
    };

    let runner = SweepRunner::new(config);
    let display = SweepDisplay::new(&cli.simulator);
    let logger = JsonlLogger::new(&cli.log_dir).context("Failed to initialize JSONL logger")?;

    display.print_header(&range);

    let mut summary = SweepSummary::default();
    for clk in range.values() {
        display.point_started(clk, &render_command(&runner.command_for(clk)));

        let result = runner.run_point(clk).await;
        display.point_finished(&result);

        // A run-log write failure must not stop the sweep either.
        if let Err(err) = logger.append(&build_outcome(&result)) {
            eprintln!("Warning: failed to record clk {clk} outcome: {err:#}");
        }

        summary.results.push(result);
    }

    display.print_summary(&summary);

    // Legacy behavior: exit 0 as long as every point was attempted. With
    // --strict, a failed point fails the sweep.
    if cli.strict && !summary.all_succeeded() {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_legacy_sweep() {
        let cli = Cli::parse_from(["sweep"]);
        assert_eq!(cli.simulator, "cpphdl");
        assert_eq!(cli.start, 0);
        assert_eq!(cli.stop, 250);
        assert_eq!(cli.step, 10);
        assert_eq!(cli.workdir_prefix, "freq");
        assert!(!cli.strict);
        assert!(cli.args.is_empty());
    }

    #[test]
    fn test_cli_forwards_trailing_args_including_hyphenated() {
        let cli = Cli::parse_from(["sweep", "design.llvm", "--opt-level", "3"]);
        assert_eq!(cli.args, vec!["design.llvm", "--opt-level", "3"]);
    }

    #[test]
    fn test_cli_custom_range() {
        let cli = Cli::parse_from(["sweep", "--start", "100", "--stop", "200", "--step", "25"]);
        assert_eq!(cli.start, 100);
        assert_eq!(cli.stop, 200);
        assert_eq!(cli.step, 25);
    }

    #[test]
    fn test_build_outcome_copies_point_fields() {
        let result = PointResult {
            clk: 30,
            workdir: "freq30".to_string(),
            success: false,
            exit_code: Some(2),
            stdout: String::new(),
            stderr: "boom".to_string(),
            duration_secs: 9,
        };

        let outcome = build_outcome(&result);
        assert_eq!(outcome.clk, 30);
        assert_eq!(outcome.workdir, "freq30");
        assert!(!outcome.success);
        assert_eq!(outcome.exit_code, Some(2));
        assert_eq!(outcome.duration_secs, 9);
    }
}
