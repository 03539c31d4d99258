//! Cycle log navigator
//!
//! Interactive terminal viewer for cycle-stamped simulator debug logs:
//! jump to a cycle by number, step with the arrow keys, quit with `q`.

pub mod cycle_log;
pub mod keys;
pub mod session;
pub mod state;

pub use cycle_log::{parse_cycle, CycleLog};
pub use keys::{Key, KeyDecoder};
pub use session::NavSession;
pub use state::{Action, Navigator};
