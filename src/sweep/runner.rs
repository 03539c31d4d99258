//! Sweep execution
//!
//! Runs the external simulator once per clock value in the configured range,
//! strictly sequentially. The sweep is a best-effort batch: a failed point is
//! recorded and the remaining points still run. Nothing is retried.

use std::process::Stdio;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

use crate::sweep::command::{build_command, workdir_name};
use crate::sweep::range::ClockRange;

/// Configuration for one frequency sweep
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Simulator binary to invoke
    pub simulator: String,
    /// User-supplied arguments, forwarded verbatim to every invocation
    pub args: Vec<String>,
    /// Clock values to sweep
    pub range: ClockRange,
    /// Prefix for per-point working directory names
    pub workdir_prefix: String,
}

/// Result of one simulator invocation at a single sweep point
#[derive(Debug, Clone)]
pub struct PointResult {
    /// Clock value this point was run at
    pub clk: u64,
    /// Working directory passed to the simulator
    pub workdir: String,
    /// Whether the invocation exited with code 0
    pub success: bool,
    /// Process exit code (None if killed by signal or never spawned)
    pub exit_code: Option<i32>,
    /// Captured stdout output
    pub stdout: String,
    /// Captured stderr output (or the spawn error message)
    pub stderr: String,
    /// Wall-clock duration of the invocation in seconds
    pub duration_secs: u64,
}

/// Outcome of a whole sweep
#[derive(Debug, Default)]
pub struct SweepSummary {
    /// Per-point results in sweep order
    pub results: Vec<PointResult>,
}

impl SweepSummary {
    /// Total number of points that were run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Clock values of the points that failed, in sweep order.
    #[must_use]
    pub fn failed_clks(&self) -> Vec<u64> {
        self.results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.clk)
            .collect()
    }

    /// Whether every point in the sweep succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.success)
    }
}

/// Runs frequency sweeps by invoking the external simulator per clock value
#[derive(Debug)]
pub struct SweepRunner {
    config: SweepConfig,
}

impl SweepRunner {
    /// Create a new runner with the given configuration
    #[must_use]
    pub const fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// The sweep configuration.
    #[must_use]
    pub const fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Build the simulator command for one clock value.
    #[must_use]
    pub fn command_for(&self, clk: u64) -> std::process::Command {
        build_command(
            &self.config.simulator,
            &self.config.args,
            clk,
            &self.config.workdir_prefix,
        )
    }

    /// Run a single sweep point.
    ///
    /// A spawn failure (missing binary) is itself a recorded failure, not an
    /// error: the sweep must continue past it.
    pub async fn run_point(&self, clk: u64) -> PointResult {
        let workdir = workdir_name(&self.config.workdir_prefix, clk);
        let cmd = self.command_for(clk);

        match run_command(cmd).await {
            Ok((stdout, stderr, exit_code, duration_secs)) => PointResult {
                clk,
                workdir,
                success: exit_code == Some(0),
                exit_code,
                stdout,
                stderr,
                duration_secs,
            },
            Err(err) => PointResult {
                clk,
                workdir,
                success: false,
                exit_code: None,
                stdout: String::new(),
                stderr: format!("{err:#}"),
                duration_secs: 0,
            },
        }
    }

    /// Run the whole sweep, invoking `on_point` after each point completes.
    ///
    /// Points are strictly sequential; a failed point never aborts the
    /// remaining ones.
    pub async fn run<F>(&self, mut on_point: F) -> SweepSummary
    where
        F: FnMut(&PointResult),
    {
        let mut summary = SweepSummary::default();

        for clk in self.config.range.values() {
            let result = self.run_point(clk).await;
            on_point(&result);
            summary.results.push(result);
        }

        summary
    }
}

/// Run a command, streaming output to terminal and capturing it.
///
/// Spawns the process with piped stdout/stderr, reads them concurrently,
/// forwards each line to the terminal, and returns the captured output.
pub async fn run_command(cmd: std::process::Command) -> Result<(String, String, Option<i32>, u64)> {
    let mut tokio_cmd = TokioCommand::from(cmd);
    tokio_cmd.stdout(Stdio::piped());
    tokio_cmd.stderr(Stdio::piped());

    let start = Instant::now();

    let mut child = tokio_cmd.spawn().context("Failed to spawn simulator")?;

    // Take ownership of stdout/stderr handles
    let child_stdout = child.stdout.take().context("Failed to capture stdout")?;
    let child_stderr = child.stderr.take().context("Failed to capture stderr")?;

    // Read stdout and stderr concurrently
    let stdout_handle = tokio::spawn(async move {
        let reader = BufReader::new(child_stdout);
        let mut lines = reader.lines();
        let mut captured = String::new();
        while let Ok(Some(line)) = lines.next_line().await {
            println!("{line}");
            if !captured.is_empty() {
                captured.push('\n');
            }
            captured.push_str(&line);
        }
        captured
    });

    let stderr_handle = tokio::spawn(async move {
        let reader = BufReader::new(child_stderr);
        let mut lines = reader.lines();
        let mut captured = String::new();
        while let Ok(Some(line)) = lines.next_line().await {
            eprintln!("{line}");
            if !captured.is_empty() {
                captured.push('\n');
            }
            captured.push_str(&line);
        }
        captured
    });

    // Wait for process to finish and collect output
    let status = child.wait().await.context("Failed waiting for simulator")?;
    let stdout_result = stdout_handle.await.context("stdout reader panicked")?;
    let stderr_result = stderr_handle.await.context("stderr reader panicked")?;

    let duration_secs = start.elapsed().as_secs();

    Ok((stdout_result, stderr_result, status.code(), duration_secs))
}
