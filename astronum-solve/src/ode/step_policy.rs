use thiserror::Error;

/// Step size used when neither a step size nor an iteration count is set.
pub const DEFAULT_STEP_SIZE: f64 = 1e-4;

/// Largest iteration count the default policy will derive.
pub const DEFAULT_ITERATION_CAP: usize = 10_000;

/// How a solver turns a span `[x0, x_target]` into a step size and an
/// iteration count.
///
/// Exactly one of the three configurations holds at a time. Setting a step
/// size replaces a previously set iteration count and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepPolicy {
    /// Derive both values from [`DEFAULT_STEP_SIZE`] and
    /// [`DEFAULT_ITERATION_CAP`].
    ///
    /// The default step is used unless it would need more iterations than
    /// the cap, in which case the cap is used and a larger step is derived.
    #[default]
    Default,

    /// Use this step size and derive the iteration count.
    StepSize(f64),

    /// Use this iteration count and derive the step size.
    IterationCount(usize),
}

/// A resolved step size and iteration count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub step: f64,
    pub iterations: usize,
}

/// Errors from building an explicit step policy.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("step size must be finite and positive, got {0}")]
    StepSize(f64),

    #[error("iteration count must be greater than 1, got {0}")]
    IterationCount(usize),
}

impl StepPolicy {
    /// Creates a policy with an explicit step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive.
    pub fn with_step_size(step: f64) -> Result<Self, ConfigError> {
        if step.is_finite() && step > 0.0 {
            Ok(Self::StepSize(step))
        } else {
            Err(ConfigError::StepSize(step))
        }
    }

    /// Creates a policy with an explicit iteration count.
    ///
    /// # Errors
    ///
    /// Returns an error if `iterations` is not greater than 1.
    pub fn with_iteration_count(iterations: usize) -> Result<Self, ConfigError> {
        if iterations > 1 {
            Ok(Self::IterationCount(iterations))
        } else {
            Err(ConfigError::IterationCount(iterations))
        }
    }

    /// Switches to an explicit step size.
    ///
    /// An invalid `step` is ignored and the current policy is kept; a warning
    /// is logged.
    pub fn set_step_size(&mut self, step: f64) {
        match Self::with_step_size(step) {
            Ok(policy) => *self = policy,
            Err(err) => log::warn!("ignoring step size, keeping {self:?}: {err}"),
        }
    }

    /// Switches to an explicit iteration count.
    ///
    /// An invalid `iterations` is ignored and the current policy is kept; a
    /// warning is logged.
    pub fn set_iteration_count(&mut self, iterations: usize) {
        match Self::with_iteration_count(iterations) {
            Ok(policy) => *self = policy,
            Err(err) => log::warn!("ignoring iteration count, keeping {self:?}: {err}"),
        }
    }

    /// Resolves the step size and iteration count for the span from `x0` to
    /// `x_target`.
    ///
    /// Derived iteration counts are truncated toward zero, and an empty or
    /// reversed span resolves to zero iterations.
    #[must_use]
    pub fn resolve(&self, x0: f64, x_target: f64) -> Resolution {
        let span = x_target - x0;
        match *self {
            Self::StepSize(step) => Resolution {
                step,
                iterations: iterations_for(span, step),
            },
            Self::IterationCount(iterations) => Resolution {
                step: span / iterations as f64,
                iterations,
            },
            Self::Default => {
                let iterations = iterations_for(span, DEFAULT_STEP_SIZE);
                if iterations > DEFAULT_ITERATION_CAP {
                    Resolution {
                        step: span / DEFAULT_ITERATION_CAP as f64,
                        iterations: DEFAULT_ITERATION_CAP,
                    }
                } else {
                    Resolution {
                        step: DEFAULT_STEP_SIZE,
                        iterations,
                    }
                }
            }
        }
    }
}

/// Number of whole steps of size `step` that fit in `span`.
///
/// The float-to-int cast saturates, so negative or NaN spans give zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn iterations_for(span: f64, step: f64) -> usize {
    (span / step).floor() as usize
}
