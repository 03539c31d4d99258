//! Rich CLI display for sweep execution
//!
//! Renders sweep progress and the end-of-run summary as human-readable
//! terminal output. All output goes to stderr so stdout stays reserved for
//! the simulator's own streamed output.

use colored::Colorize;

use crate::sweep::runner::{PointResult, SweepSummary};
use crate::sweep::ClockRange;

/// Display handler for frequency sweep output
pub struct SweepDisplay {
    simulator: String,
}

impl SweepDisplay {
    /// Create a new display handler for the given simulator binary
    #[must_use]
    pub fn new(simulator: &str) -> Self {
        Self {
            simulator: simulator.to_string(),
        }
    }

    /// Print the sweep header at the start of execution
    pub fn print_header(&self, range: &ClockRange) {
        eprintln!(
            "\n{} {}",
            "===".bold().cyan(),
            format!("Frequency sweep: {} ({range})", self.simulator)
                .bold()
                .cyan()
        );
        eprintln!("{}", "─".repeat(50).dimmed());
    }

    /// Print the command line about to run for one sweep point.
    ///
    /// The legacy driver echoed every command before invoking it; operators
    /// rely on this to reproduce a single point by hand.
    pub fn point_started(&self, clk: u64, command_line: &str) {
        eprintln!(
            "  {} {} {}",
            "▶".blue(),
            format!("clk {clk}").bold(),
            command_line.dimmed()
        );
    }

    /// Print the outcome of one completed sweep point
    pub fn point_finished(&self, result: &PointResult) {
        if result.success {
            eprintln!(
                "  {} clk {} ({}s)",
                "✓".green().bold(),
                result.clk,
                result.duration_secs
            );
        } else {
            eprintln!(
                "  {} clk {} failed with exit code {}",
                "✗".red().bold(),
                result.clk,
                format_exit_code(result.exit_code).red()
            );
        }
    }

    /// Print the post-sweep summary
    pub fn print_summary(&self, summary: &SweepSummary) {
        eprintln!("{}", "─".repeat(50).dimmed());

        let failed = summary.failed_clks();
        let status = if failed.is_empty() {
            "COMPLETED".green().bold().to_string()
        } else {
            "COMPLETED WITH FAILURES".red().bold().to_string()
        };
        eprintln!("  {} {}", status, self.simulator.bold());

        let total_secs: u64 = summary.results.iter().map(|r| r.duration_secs).sum();
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        eprintln!(
            "  {} {} points | {} failed | {mins}m {secs}s",
            "Stats:".dimmed(),
            summary.total(),
            failed.len()
        );

        if !failed.is_empty() {
            let clks = failed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            eprintln!("  {} clk values: {clks}", "⚠".yellow().bold());
        }

        eprintln!();
    }
}

/// Format an exit code for display, returning "unknown" if the process was
/// killed by a signal or never spawned.
fn format_exit_code(exit_code: Option<i32>) -> String {
    exit_code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}
