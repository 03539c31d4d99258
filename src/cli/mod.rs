//! Terminal display helpers for the sweep driver
//!
//! Colored progress and summary rendering. The navigator has its own raw
//! screen handling under [`crate::nav`].

pub mod display;

pub use display::SweepDisplay;
