//! Simutils - hardware-simulation workflow utilities
//!
//! Two independent tools sharing one library: a frequency sweep driver that
//! invokes an external simulator across a range of clock values, and an
//! interactive navigator for cycle-stamped debug logs.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod log;
pub mod nav;
pub mod sweep;
pub mod term;

// Re-export commonly used types
pub use cli::SweepDisplay;
pub use log::{JsonlLogger, PointOutcome};
pub use nav::{CycleLog, Key, KeyDecoder, NavSession, Navigator};
pub use sweep::{ClockRange, PointResult, SweepConfig, SweepRunner, SweepSummary};
pub use term::{enable_raw_mode, RawModeGuard};
