//! Cycle-stamped debug log access
//!
//! A debug log is plain text, one record per line, each line beginning with
//! `[<integer>]` marking the simulation cycle it pertains to. Cycle numbers
//! are non-decreasing top-to-bottom; lookups rely on that to stop scanning
//! early. An out-of-order file yields a possibly incomplete display, exactly
//! like the legacy viewer — it is not detected.
//!
//! The file is opened once for the process lifetime and re-scanned from the
//! beginning on every lookup. No cache, no index: these are small debug logs
//! and the simplicity is deliberate.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Parse the cycle number from a log line.
///
/// The cycle is the text before the first `]`, stripped of a leading `[`.
/// Returns `None` for lines that do not carry a parseable cycle prefix.
#[must_use]
pub fn parse_cycle(line: &str) -> Option<u64> {
    let prefix = line.split(']').next()?;
    prefix.trim().strip_prefix('[')?.trim().parse().ok()
}

/// A cycle-stamped debug log, open for the lifetime of a viewer session
#[derive(Debug)]
pub struct CycleLog {
    file: File,
}

impl CycleLog {
    /// Open a debug log file.
    ///
    /// # Errors
    /// A missing or unreadable file is fatal at startup.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        Ok(Self { file })
    }

    /// Cycle number of the first cycle-tagged line in the file.
    ///
    /// # Errors
    /// A log with no parseable cycle lines is unusable: the viewer would have
    /// nothing to display and no cursor to start from.
    pub fn first_cycle(&mut self) -> Result<u64> {
        self.rewind()?;
        for line in BufReader::new(&self.file).lines() {
            let line = line.context("Failed to read log file")?;
            if let Some(cycle) = parse_cycle(&line) {
                return Ok(cycle);
            }
        }
        bail!("Log file contains no cycle-tagged lines (expected lines starting with [<cycle>])");
    }

    /// Collect every line belonging to the given cycle, in file order.
    ///
    /// Lines with a smaller cycle are skipped; scanning stops at the first
    /// line with a larger cycle. An empty result is valid, not an error.
    pub fn collect(&mut self, cycle: u64) -> Result<Vec<String>> {
        self.rewind()?;

        let mut block = Vec::new();
        for line in BufReader::new(&self.file).lines() {
            let line = line.context("Failed to read log file")?;
            // Malformed lines carry no cycle and are skipped silently.
            let Some(this_cycle) = parse_cycle(&line) else {
                continue;
            };
            if this_cycle < cycle {
                continue;
            }
            if this_cycle > cycle {
                break;
            }
            block.push(line);
        }

        Ok(block)
    }

    fn rewind(&mut self) -> Result<()> {
        let _ = self
            .file
            .seek(SeekFrom::Start(0))
            .context("Failed to rewind log file")?;
        Ok(())
    }
}
