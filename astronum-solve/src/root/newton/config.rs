use thiserror::Error;

/// Precision used when none is set.
pub const DEFAULT_PRECISION: f64 = 1e-4;

/// Iteration cap used when none is set.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Configuration for the Newton-Raphson solver.
///
/// The solver stops once two successive iterates differ by at most
/// `precision`, or after `max_iterations` updates. Choosing one of the two
/// resets the other to its default.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    precision: f64,
    max_iterations: usize,
}

/// Errors from building a Newton-Raphson configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("precision must be finite and positive, got {0}")]
    Precision(f64),

    #[error("iteration cap must be greater than 1, got {0}")]
    MaxIterations(usize),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Config {
    /// Creates a config with the given precision and the default cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is not finite and positive.
    pub fn with_precision(precision: f64) -> Result<Self, ConfigError> {
        if precision.is_finite() && precision > 0.0 {
            Ok(Self {
                precision,
                ..Self::default()
            })
        } else {
            Err(ConfigError::Precision(precision))
        }
    }

    /// Creates a config with the given cap and the default precision.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iterations` is not greater than 1.
    pub fn with_max_iterations(max_iterations: usize) -> Result<Self, ConfigError> {
        if max_iterations > 1 {
            Ok(Self {
                max_iterations,
                ..Self::default()
            })
        } else {
            Err(ConfigError::MaxIterations(max_iterations))
        }
    }

    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}
