//! Interactive navigator session
//!
//! One blocking read-key / act / redraw loop on a single thread. The
//! terminal is placed in raw input mode for the duration of the loop and
//! restored on every exit path by the guard's drop, including errors
//! propagating out of the loop.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};

use crate::nav::cycle_log::CycleLog;
use crate::nav::keys::KeyDecoder;
use crate::nav::state::{Action, Navigator};
use crate::term::enable_raw_mode;

/// ANSI clear-screen sequence emitted before every redraw.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// An interactive viewer session over one cycle log
#[derive(Debug)]
pub struct NavSession {
    log: CycleLog,
}

impl NavSession {
    /// Create a session over an opened cycle log
    #[must_use]
    pub const fn new(log: CycleLog) -> Self {
        Self { log }
    }

    /// Run the interactive session on the real terminal.
    ///
    /// Raw mode is held for the whole loop; the guard restores the terminal
    /// when this function returns or unwinds.
    pub fn run(&mut self) -> Result<()> {
        let _guard = enable_raw_mode().context("Failed to enter raw terminal mode")?;
        self.run_loop(io::stdin().lock(), io::stdout())
    }

    /// Drive the session over arbitrary input/output streams.
    ///
    /// Separated from [`run`](Self::run) so the full loop is exercisable
    /// without a TTY. Terminates on quit keys or when `input` reaches EOF.
    pub fn run_loop<R: Read, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        let initial = self.log.first_cycle()?;
        let mut nav = Navigator::new(initial);
        let mut decoder = KeyDecoder::new();

        self.display_cycle(&mut out, nav.cursor())?;

        let mut byte = [0u8; 1];
        loop {
            let n = input
                .read(&mut byte)
                .context("Failed to read from terminal")?;
            if n == 0 {
                // EOF / closed stream ends the session.
                break;
            }

            // Raw mode disables terminal echo; echo the keystroke ourselves
            // so a half-typed jump target stays visible.
            out.write_all(&byte)
                .and_then(|()| out.flush())
                .context("Failed to echo input")?;

            let Some(key) = decoder.feed(byte[0]) else {
                continue;
            };

            match nav.handle_key(key) {
                Action::Redraw(cycle) => self.display_cycle(&mut out, cycle)?,
                Action::Quit => break,
                Action::Ignore => {}
            }
        }

        Ok(())
    }

    /// Clear the screen and print the block of lines for one cycle.
    ///
    /// An empty block clears the screen to nothing; that is a valid display
    /// for a cycle with no log lines.
    fn display_cycle<W: Write>(&mut self, out: &mut W, cycle: u64) -> Result<()> {
        let block = self.log.collect(cycle)?;

        write!(out, "{CLEAR_SCREEN}").context("Failed to clear screen")?;
        for line in &block {
            writeln!(out, "{line}").context("Failed to write log line")?;
        }
        out.flush().context("Failed to flush display")?;

        Ok(())
    }
}
