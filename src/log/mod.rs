//! Logging and observability
//!
//! This module provides run-history logging for the sweep driver:
//! JSONL logging of per-point invocation outcomes.

pub mod jsonl;

pub use jsonl::{JsonlLogger, PointOutcome};
