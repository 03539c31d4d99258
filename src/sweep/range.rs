//! Clock value ranges for frequency sweeps
//!
//! A sweep visits every value of an inclusive-exclusive arithmetic sequence
//! `[start, stop)` with a fixed step. The default matches the legacy sweep:
//! 0 to 250 exclusive in steps of 10, i.e. 25 points.

use anyhow::{bail, Result};

/// Default sweep start (inclusive).
pub const DEFAULT_START: u64 = 0;
/// Default sweep stop (exclusive).
pub const DEFAULT_STOP: u64 = 250;
/// Default sweep step.
pub const DEFAULT_STEP: u64 = 10;

/// An inclusive-exclusive arithmetic range of clock values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockRange {
    /// First clock value (inclusive)
    pub start: u64,
    /// End of the range (exclusive)
    pub stop: u64,
    /// Distance between consecutive clock values
    pub step: u64,
}

impl Default for ClockRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
            step: DEFAULT_STEP,
        }
    }
}

impl ClockRange {
    /// Create a validated clock range.
    ///
    /// # Errors
    /// Returns an error if `step` is zero (the sweep would never terminate).
    pub fn new(start: u64, stop: u64, step: u64) -> Result<Self> {
        if step == 0 {
            bail!("Sweep step must be non-zero");
        }
        Ok(Self { start, stop, step })
    }

    /// Number of sweep points in the range.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.start >= self.stop {
            0
        } else {
            (self.stop - self.start).div_ceil(self.step) as usize
        }
    }

    /// Whether the range contains no sweep points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.stop
    }

    /// Iterate over the clock values of the range.
    pub fn values(&self) -> impl Iterator<Item = u64> {
        let Self { start, stop, step } = *self;
        (start..stop).step_by(step as usize)
    }
}

impl std::fmt::Display for ClockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{} step {}", self.start, self.stop, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_matches_legacy_sweep() {
        let range = ClockRange::default();
        assert_eq!(range.start, 0);
        assert_eq!(range.stop, 250);
        assert_eq!(range.step, 10);
        assert_eq!(range.len(), 25);
    }

    #[test]
    fn test_default_values_are_arithmetic_sequence() {
        let values: Vec<u64> = ClockRange::default().values().collect();
        assert_eq!(values.len(), 25);
        assert_eq!(values[0], 0);
        assert_eq!(values[1], 10);
        assert_eq!(values[24], 240);
        for pair in values.windows(2) {
            assert_eq!(pair[1] - pair[0], 10);
        }
    }

    #[test]
    fn test_stop_is_exclusive() {
        let range = ClockRange::new(0, 30, 10).unwrap();
        let values: Vec<u64> = range.values().collect();
        assert_eq!(values, vec![0, 10, 20]);
    }

    #[test]
    fn test_stop_not_on_step_boundary() {
        let range = ClockRange::new(0, 25, 10).unwrap();
        let values: Vec<u64> = range.values().collect();
        assert_eq!(values, vec![0, 10, 20]);
        assert_eq!(range.len(), 3);
    }

    #[test]
    fn test_zero_step_rejected() {
        let result = ClockRange::new(0, 100, 0);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("non-zero"));
    }

    #[test]
    fn test_empty_range() {
        let range = ClockRange::new(100, 100, 10).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.values().count(), 0);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = ClockRange::new(200, 100, 10).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.values().count(), 0);
    }

    #[test]
    fn test_single_point_range() {
        let range = ClockRange::new(50, 51, 10).unwrap();
        let values: Vec<u64> = range.values().collect();
        assert_eq!(values, vec![50]);
    }

    #[test]
    fn test_display_format() {
        let range = ClockRange::default();
        assert_eq!(range.to_string(), "0..250 step 10");
    }
}
