//! Terminal control
//!
//! Scoped raw-mode acquisition for the navigator's keyboard loop.

pub mod raw;

pub use raw::{enable_raw_mode, is_tty, RawModeGuard};
