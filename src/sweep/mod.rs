//! Frequency sweep driver
//!
//! Invokes an external simulator once per clock value in an arithmetic
//! range, isolating each invocation's outputs in a per-point working
//! directory.

pub mod command;
pub mod range;
pub mod runner;

pub use command::{build_command, DEFAULT_SIMULATOR, DEFAULT_WORKDIR_PREFIX};
pub use range::ClockRange;
pub use runner::{PointResult, SweepConfig, SweepRunner, SweepSummary};
