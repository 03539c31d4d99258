//! Simulator command construction
//!
//! Builds the `std::process::Command` for one sweep point. User-supplied
//! arguments are forwarded verbatim and in order; the clock value and a
//! per-point working directory are appended so outputs from different sweep
//! points never collide.

use std::process::Command;

/// Default simulator binary name.
pub const DEFAULT_SIMULATOR: &str = "cpphdl";

/// Default prefix for per-point working directory names.
pub const DEFAULT_WORKDIR_PREFIX: &str = "freq";

/// Build the simulator invocation for a single sweep point.
///
/// The resulting command is `<simulator> <args...> --clk <clk> --workdir
/// <prefix><clk>`. User args come first so the simulator's own flag parsing
/// sees them in the order the operator gave them.
#[must_use]
pub fn build_command(simulator: &str, args: &[String], clk: u64, workdir_prefix: &str) -> Command {
    let mut cmd = Command::new(simulator);

    for arg in args {
        cmd.arg(arg);
    }

    cmd.arg("--clk").arg(clk.to_string());
    cmd.arg("--workdir").arg(workdir_name(workdir_prefix, clk));

    cmd
}

/// The working directory name for a sweep point, e.g. `freq40` for clock 40.
#[must_use]
pub fn workdir_name(prefix: &str, clk: u64) -> String {
    format!("{prefix}{clk}")
}

/// Render a command as a single shell-style line for progress display.
#[must_use]
pub fn render_command(cmd: &Command) -> String {
    let mut line = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}
