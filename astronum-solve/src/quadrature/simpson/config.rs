use thiserror::Error;

/// Number of sub-intervals used when none is set.
pub const DEFAULT_INTERVALS: usize = 1000;

/// Configuration for composite Simpson integration.
///
/// The interval count is always even and at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    intervals: usize,
}

/// Errors from building a Simpson configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least 2 intervals are required, got {0}")]
    IntervalCount(usize),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intervals: DEFAULT_INTERVALS,
        }
    }
}

impl Config {
    /// Creates a config with `intervals` sub-intervals, rounding an odd
    /// count down to the even count below it.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 intervals would remain.
    pub fn new(intervals: usize) -> Result<Self, ConfigError> {
        let even = intervals - intervals % 2;
        if even >= 2 {
            Ok(Self { intervals: even })
        } else {
            Err(ConfigError::IntervalCount(intervals))
        }
    }

    #[must_use]
    pub fn intervals(&self) -> usize {
        self.intervals
    }
}
