//! JSONL (JSON Lines) logging for sweep run history
//!
//! Provides append-only logging of sweep point outcomes to `.sweep/sweep.jsonl`

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// Represents the outcome of a single sweep point invocation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointOutcome {
    /// Clock value the simulator was run at
    pub clk: u64,
    /// Working directory the simulator wrote its outputs to
    pub workdir: String,
    /// ISO 8601 timestamp of when the invocation completed
    pub timestamp: DateTime<Utc>,
    /// Whether the invocation exited with code 0
    pub success: bool,
    /// Process exit code (None if killed by signal or never spawned)
    pub exit_code: Option<i32>,
    /// Duration of the invocation in seconds
    pub duration_secs: u64,
}

/// JSONL logger for sweep run history
///
/// Provides append-only logging to `<log-dir>/sweep.jsonl`.
/// Each line is a JSON object representing a single sweep point outcome.
pub struct JsonlLogger {
    log_path: PathBuf,
}

impl JsonlLogger {
    /// Create a new JSONL logger
    ///
    /// # Arguments
    /// * `log_dir` - Directory where sweep.jsonl will be stored (typically `.sweep`)
    ///
    /// # Errors
    /// Returns an error if the log directory cannot be created
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        // Create the log directory if it doesn't exist
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("sweep.jsonl");

        Ok(Self { log_path })
    }

    /// Append a sweep point outcome to the log
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be opened or created
    /// - The outcome cannot be serialized to JSON
    /// - Writing to the file fails
    pub fn append(&self, outcome: &PointOutcome) -> Result<()> {
        // Open file in append mode, create if it doesn't exist
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        // Serialize to JSON
        let json =
            serde_json::to_string(outcome).context("Failed to serialize point outcome to JSON")?;

        // Write JSON line
        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all sweep point outcomes from the log
    ///
    /// # Returns
    /// A vector of all point outcomes, in chronological order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be read
    /// - Any line cannot be parsed as valid JSON
    pub fn read_all(&self) -> Result<Vec<PointOutcome>> {
        // If log file doesn't exist yet, return empty vector
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut outcomes = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let outcome: PointOutcome = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;

            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
